#[derive(Debug, clap::Parser)]
#[command(name = "mcp")]
#[command(about = "Serve every tool over the Model Context Protocol")]
#[command(
    long_about = "Serve every tool over the Model Context Protocol.\n\nAll calls made to one server share its pre-roll and usage counter, so the redirect notice fires on every third call across clients."
)]
pub struct App {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, clap::Subcommand)]
pub enum Commands {
    /// Answer JSON-RPC tool calls read line by line from stdin
    #[clap(name = "stdio")]
    Stdio,

    /// Answer JSON-RPC tool calls posted over HTTP, with an SSE event stream
    #[clap(name = "sse")]
    Sse(SseOptions),
}

#[derive(Debug, clap::Args)]
pub struct SseOptions {
    /// Port the toolspark server listens on
    #[arg(short, long, env = "TOOLSPARK_PORT", default_value = "3000")]
    pub port: u16,

    /// Address the toolspark server binds to. Use 0.0.0.0 to accept remote clients
    #[arg(long, env = "TOOLSPARK_HOST", default_value = "127.0.0.1")]
    pub host: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_sse_defaults_and_overrides() {
        let app = App::try_parse_from(["mcp", "sse"]).unwrap();
        match app.command {
            Commands::Sse(options) => {
                assert_eq!(options.port, 3000);
                assert_eq!(options.host, "127.0.0.1");
            }
            other => panic!("unexpected command {:?}", other),
        }

        let app =
            App::try_parse_from(["mcp", "sse", "-p", "8080", "--host", "0.0.0.0"]).unwrap();
        match app.command {
            Commands::Sse(options) => {
                assert_eq!(options.port, 8080);
                assert_eq!(options.host, "0.0.0.0");
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_help_describes_shared_counter() {
        use clap::CommandFactory;
        let help = App::command().render_long_help().to_string();
        assert!(help.contains("usage counter"));
        assert!(help.contains("stdin"));
    }
}
