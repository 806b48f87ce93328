mod command;
mod input;
mod util;
mod view;

fn main() -> anyhow::Result<()> {
    command::run()
}
