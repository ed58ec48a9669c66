use crate::prelude::{eprintln, *};
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};

/// Serves newline-delimited JSON-RPC on stdin/stdout until EOF.
pub async fn run_stdio(ctx: crate::Context) -> Result<()> {
    if ctx.global.verbose {
        eprintln!("Starting MCP server with stdio transport...");
        eprintln!();
    }

    let stdin = tokio::io::stdin();
    let mut stdout = tokio::io::stdout();
    let mut reader = BufReader::new(stdin);
    let mut line = String::new();

    loop {
        line.clear();
        let bytes_read = reader.read_line(&mut line).await?;

        if bytes_read == 0 {
            break;
        }

        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        log::debug!("received: {}", trimmed);

        let Some(response) = super::handle_request(trimmed, &ctx).await else {
            continue;
        };
        let response_json = serde_json::to_string(&response)?;

        log::debug!("sending: {}", response_json);

        stdout.write_all(response_json.as_bytes()).await?;
        stdout.write_all(b"\n").await?;
        stdout.flush().await?;
    }

    if ctx.global.verbose {
        eprintln!(
            "stdin closed after {} tool runs",
            ctx.pipeline.counter().current_count()
        );
    }

    Ok(())
}
