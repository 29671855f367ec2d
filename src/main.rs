fn main() -> anyhow::Result<()> {
    swatchlens::run()?;
    Ok(())
}
