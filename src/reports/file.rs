use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use chrono::{Local, NaiveDate};
use cloet_core::ModelResult;
use tracing::{debug, info, warn};

use super::text_report;

/// `prefix_MMDDYYYY.suffix`
pub fn date_stamp(prefix: &str, suffix: &str, date: NaiveDate) -> String {
    format!("{prefix}_{}.{suffix}", date.format("%m%d%Y"))
}

/// Report file name derived from the model name and scenario, stamped with `date`.
pub fn default_file_name(result: &dyn ModelResult, date: NaiveDate) -> String {
    let prefix = format!(
        "{}_{}",
        result.model_name().to_lowercase().replace(' ', "_"),
        result.scenario()
    );
    date_stamp(&prefix, "txt", date)
}

/// First free path for `file_name` inside `dir`: the name itself, or
/// `stem_N.ext` with the smallest `N >= 1` that does not exist yet.
pub fn checkfile(dir: &Path, file_name: &str) -> PathBuf {
    let path = dir.join(file_name);
    if !path.exists() {
        return path;
    }

    let name = Path::new(file_name);
    let stem = name
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let ext = name
        .extension()
        .map(|e| format!(".{}", e.to_string_lossy()))
        .unwrap_or_default();

    let mut index = 1usize;
    loop {
        let candidate = dir.join(format!("{stem}_{index}{ext}"));
        if !candidate.exists() {
            debug!(taken = %path.display(), chosen = %candidate.display(), "report name in use");
            return candidate;
        }
        index += 1;
    }
}

/// Write the text report of `result` to disk and return the path written.
///
/// Without a `filename` the report goes to the working directory under
/// [`default_file_name`]. With `check_file` an existing file is never
/// replaced; a numbered sibling name is used instead.
pub fn file_report(
    result: &dyn ModelResult,
    filename: Option<&Path>,
    check_file: bool,
) -> io::Result<PathBuf> {
    let target = match filename {
        Some(path) => path.to_path_buf(),
        None => std::env::current_dir()?.join(default_file_name(result, Local::now().date_naive())),
    };

    let target = if check_file {
        let dir = target
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_default();
        let name = target
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .ok_or_else(|| {
                io::Error::new(
                    io::ErrorKind::InvalidInput,
                    format!("report path has no file name: {}", target.display()),
                )
            })?;
        checkfile(&dir, &name)
    } else {
        if target.exists() {
            warn!(path = %target.display(), "overwriting existing report");
        }
        target
    };

    fs::write(&target, text_report(result))?;
    info!(path = %target.display(), model = result.model_name(), "report written");
    Ok(target)
}

#[cfg(test)]
mod tests {
    use super::*;
    use cloet_core::dermal::{LiquidParams, OneHandLiquidContact};
    use cloet_core::ExposureModel;

    fn run() -> cloet_core::Evaluation<OneHandLiquidContact> {
        OneHandLiquidContact::evaluate(&LiquidParams::new(0.1), Some("high")).unwrap()
    }

    #[test]
    fn date_stamp_layout() {
        let date = NaiveDate::from_ymd_opt(2019, 3, 7).unwrap();
        assert_eq!(date_stamp("report", "txt", date), "report_03072019.txt");
    }

    #[test]
    fn default_name_uses_model_and_scenario() {
        let date = NaiveDate::from_ymd_opt(2020, 12, 31).unwrap();
        assert_eq!(
            default_file_name(&run(), date),
            "epa-oppt_1-hand_dermal_contact_with_liquid_high_12312020.txt"
        );
    }

    #[test]
    fn checkfile_picks_smallest_free_index() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(checkfile(dir.path(), "out.txt"), dir.path().join("out.txt"));

        fs::write(dir.path().join("out.txt"), "").unwrap();
        assert_eq!(checkfile(dir.path(), "out.txt"), dir.path().join("out_1.txt"));

        fs::write(dir.path().join("out_1.txt"), "").unwrap();
        fs::write(dir.path().join("out_3.txt"), "").unwrap();
        assert_eq!(checkfile(dir.path(), "out.txt"), dir.path().join("out_2.txt"));
    }

    #[test]
    fn checkfile_without_extension() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("report"), "").unwrap();
        assert_eq!(checkfile(dir.path(), "report"), dir.path().join("report_1"));
    }

    #[test]
    fn file_report_never_clobbers_when_checking() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("dermal.txt");
        fs::write(&target, "keep me").unwrap();

        let written = file_report(&run(), Some(&target), true).unwrap();
        assert_eq!(written, dir.path().join("dermal_1.txt"));
        assert_eq!(fs::read_to_string(&target).unwrap(), "keep me");
        assert_eq!(fs::read_to_string(&written).unwrap(), text_report(&run()));
    }

    #[test]
    fn file_report_overwrites_when_not_checking() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("dermal.txt");
        fs::write(&target, "old").unwrap();

        let written = file_report(&run(), Some(&target), false).unwrap();
        assert_eq!(written, target);
        assert!(fs::read_to_string(&target).unwrap().starts_with("|---"));
    }
}
