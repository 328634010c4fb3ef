mod command;
mod logging;
mod summary;
mod tui;
mod view;

fn main() -> anyhow::Result<()> {
    command::run()
}
