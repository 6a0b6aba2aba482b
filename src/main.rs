use custom_shell::config::Config;
use custom_shell::repl::start_repl;
use env_logger::Env;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();
    start_repl(Config::from_env())
}
