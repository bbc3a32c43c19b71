use apiurl_codemod::tool::{Tool, run_tool};
use apiurl_codemod::ui::{CodemodArgs, Commands, print_completions};
use clap::{CommandFactory, Parser};

/// Replace hardcoded API endpoint URLs with calls to the URL helper
#[derive(Parser, Debug)]
#[command(name = "fix-api-urls", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    #[command(flatten)]
    args: CodemodArgs,
}

fn main() {
    let cli = Cli::parse();

    if let Some(Commands::CompletionGenerate { shell }) = cli.command {
        print_completions(shell, &mut Cli::command());
        return;
    }

    if let Err(e) = run_tool(Tool::FixApiUrls, &cli.args) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
