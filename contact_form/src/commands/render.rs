use std::io::Write;

use contact_form_config::Config;

use crate::environment;

/// Write the empty contact form to `output`.
pub fn render(config: &Config, mut output: impl Write) -> anyhow::Result<()> {
    let page = environment::page(config);
    writeln!(output, "{}", page.render()?)?;
    output.flush()?;
    Ok(())
}
