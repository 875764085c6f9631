use anyhow::Result;

fn main() -> Result<()> {
    gitdrill::cli::run()
}
