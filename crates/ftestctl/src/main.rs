use anyhow::Result;
use clap::Parser;
use libftest::LogLevel;
use log::error;

mod commands;

#[derive(Parser)]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
struct Opts {
    #[clap(subcommand)]
    subcmd: commands::FtestCmd,
}

fn main() -> Result<()> {
    let default_filter = LogLevel::default().to_level_filter().to_string();
    env_logger::init_from_env(
        env_logger::Env::default().filter_or(env_logger::DEFAULT_FILTER_ENV, default_filter),
    );
    let opts = Opts::parse();
    let cmd_result = match opts.subcmd {
        commands::FtestCmd::Show(show) => commands::show::show(show),
        commands::FtestCmd::ConfigPath(path) => commands::config_path::config_path(path),
        commands::FtestCmd::Spec(spec) => commands::spec::spec(spec),
        commands::FtestCmd::List(list) => commands::list::list(list),
    };

    if let Err(ref e) = cmd_result {
        error!("error in executing command: {:?}", e);
    }

    cmd_result
}
