//! User prompts for first-time configuration
//!
//! Collects Warcraft Logs client credentials from stdin when no config file
//! exists and the credentials are not provided through the environment.

use crate::error::AppError;
use tokio::io::{self, AsyncBufReadExt, AsyncWriteExt};

/// Prompts for a single line of input and returns it trimmed.
async fn prompt_line<R>(reader: &mut R, label: &str) -> Result<String, AppError>
where
    R: AsyncBufReadExt + Unpin,
{
    let mut stdout = io::stdout();
    stdout.write_all(format!("{label}: ").as_bytes()).await?;
    stdout.flush().await?;

    let mut input = String::new();
    reader.read_line(&mut input).await?;
    Ok(input.trim().to_string())
}

/// Prompts the user for the OAuth client id and secret.
///
/// # Returns
/// * `Ok((client_id, client_secret))` - The trimmed user input
/// * `Err(AppError)` - Error reading from stdin
pub async fn prompt_for_credentials() -> Result<(String, String), AppError> {
    println!("No configuration found. Create a client at https://www.warcraftlogs.com/api/clients/");
    let mut reader = io::BufReader::new(io::stdin());
    let client_id = prompt_line(&mut reader, "Client ID").await?;
    let client_secret = prompt_line(&mut reader, "Client secret").await?;
    Ok((client_id, client_secret))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_prompt_line_trims_input() {
        let input: &[u8] = b"  abc123  \nnext\n";
        let mut reader = io::BufReader::new(input);
        let first = prompt_line(&mut reader, "Client ID").await.unwrap();
        let second = prompt_line(&mut reader, "Client secret").await.unwrap();
        assert_eq!(first, "abc123");
        assert_eq!(second, "next");
    }

    #[tokio::test]
    async fn test_prompt_line_at_eof_is_empty() {
        let input: &[u8] = b"";
        let mut reader = io::BufReader::new(input);
        let value = prompt_line(&mut reader, "Client ID").await.unwrap();
        assert!(value.is_empty());
    }
}
