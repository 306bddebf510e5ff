mod commands;
mod terminal;

use commands::{CommandLine, Commands, convert, extract, run};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();

    terminal::logging::init(commands.quiet);

    match commands.command {
        Commands::Run(args) => run::run(args).await,
        Commands::Convert { input, output } => convert::convert(&input, &output),
        Commands::Extract { input, output } => extract::extract(&input, &output),
    }
}
