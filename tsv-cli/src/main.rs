use clap::CommandFactory;
use clap::Parser;
use syb_tsv_cli::cli::CliArgs;

pub fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();

    if let Some(shell) = args.print_completions {
        let mut cmd = CliArgs::command();
        clap_complete::generate(shell, &mut cmd, "tsvtool", &mut std::io::stdout());
        return Ok(());
    }

    env_logger::Builder::new()
        .filter_level(args.get_log_level().unwrap_or(log::LevelFilter::Warn))
        .init();

    args.run(&mut std::io::stdout().lock())
}
