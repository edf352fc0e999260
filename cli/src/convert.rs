use crate::commands::{CliError, ConvertCmd};
use pathdata::svg::{parse_with_options, to_path_string};
use std::io::Write;

pub fn convert(mut cmd: ConvertCmd) -> Result<(), CliError> {
    let path = parse_with_options(cmd.input.trim(), &cmd.options)?;
    log::info!("{} commands", path.len());

    let decimals = cmd.options.resolve().decimals;
    writeln!(
        &mut *cmd.output,
        "{}",
        to_path_string(&path, decimals, cmd.minify)
    )?;

    Ok(())
}
