// src/session.rs
use crate::metrics::Metrics;
use crate::verifier::SecretVerifier;
use crate::VerifierConfig;
use thiserror::Error;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncReadExt, AsyncWrite, AsyncWriteExt};
use zeroize::Zeroizing;

/// Longest line accepted from the prompt; anything beyond is left unread.
pub const MAX_INPUT_LEN: usize = 63;

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Correct,
    Wrong,
}

/// Read one candidate line, cut at the first newline.
///
/// At most [`MAX_INPUT_LEN`] bytes are consumed. A trailing `\r` before the
/// newline is dropped too. EOF yields an empty candidate.
pub async fn read_candidate<R>(reader: &mut R) -> Result<Zeroizing<Vec<u8>>, std::io::Error>
where
    R: AsyncBufRead + Unpin,
{
    let mut line = Zeroizing::new(Vec::with_capacity(MAX_INPUT_LEN));
    let mut limited = AsyncReadExt::take(&mut *reader, MAX_INPUT_LEN as u64);
    limited.read_until(b'\n', &mut *line).await?;

    if let Some(pos) = line.iter().position(|&b| b == b'\n') {
        line.truncate(pos);
    }
    if line.last() == Some(&b'\r') {
        line.pop();
    }

    Ok(line)
}

/// Prompt for a flag, check it and report the verdict.
pub async fn run_session<R, W>(
    verifier: &SecretVerifier,
    config: &VerifierConfig,
    reader: &mut R,
    writer: &mut W,
    metrics: &Metrics,
) -> Result<Verdict, SessionError>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    writer.write_all(config.banner.as_bytes()).await?;
    writer.write_all(b"\n").await?;
    writer.write_all(config.prompt.as_bytes()).await?;
    writer.flush().await?;

    let candidate = read_candidate(reader).await?;
    let outcome = verifier.verify(&candidate);
    metrics.record(&outcome);

    let verdict = match outcome {
        Ok(true) => Verdict::Correct,
        Ok(false) => Verdict::Wrong,
        Err(e) => {
            log::debug!("Candidate rejected: {}", e);
            Verdict::Wrong
        }
    };
    log::info!("Session verdict: {:?}", verdict);

    let message = match verdict {
        Verdict::Correct => &config.success_message,
        Verdict::Wrong => &config.failure_message,
    };
    writer.write_all(message.as_bytes()).await?;
    writer.write_all(b"\n").await?;
    writer.flush().await?;

    Ok(verdict)
}
