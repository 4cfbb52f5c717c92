use weekhours::{commands::Cli, libs::logging};

fn main() -> anyhow::Result<()> {
    logging::init();
    Cli::menu()
}
