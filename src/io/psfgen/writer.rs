use crate::io::error::Error;
use crate::model::directive::DirectiveSet;
use std::io::Write;
use std::path::{Path, PathBuf};

const FILE_PREFIX: &str = "psfgen_";

/// Writes one block per chain: a blank line, `Chain <id>:`, then its directives.
pub fn write<W: Write>(mut writer: W, directives: &DirectiveSet) -> Result<(), Error> {
    for chain in directives.iter_chains() {
        writeln!(writer).map_err(|e| Error::from_io(e, None))?;
        writeln!(writer, "Chain {}:", chain.chain).map_err(|e| Error::from_io(e, None))?;
        for directive in chain.iter() {
            writeln!(writer, "{directive}").map_err(|e| Error::from_io(e, None))?;
        }
    }
    writer.flush().map_err(|e| Error::from_io(e, None))
}

/// Location of the directive file that accompanies a filtered report.
pub fn psfgen_path(report: &Path) -> PathBuf {
    let name = report
        .file_name()
        .map(|name| name.to_string_lossy())
        .unwrap_or_default();
    report.with_file_name(format!("{FILE_PREFIX}{name}"))
}
