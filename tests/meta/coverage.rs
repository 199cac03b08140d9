//! Tests that the unit test tree mirrors `src/`

#[cfg(test)]
mod tests {
    use op_art::geometry::PatternKind;
    use std::collections::BTreeSet;
    use std::fs;
    use std::io;
    use std::path::Path;

    const SRC_DIR: &str = "src";
    const UNIT_DIR: &str = "tests/unit";

    /// Relative paths of every `.rs` file and directory under `base`
    fn relative_paths(base: &Path) -> io::Result<BTreeSet<String>> {
        let mut paths = BTreeSet::new();
        collect(base, base, &mut paths)?;
        Ok(paths)
    }

    fn collect(dir: &Path, base: &Path, paths: &mut BTreeSet<String>) -> io::Result<()> {
        for entry in fs::read_dir(dir)? {
            let path = entry?.path();
            let relative = path
                .strip_prefix(base)
                .map_err(io::Error::other)?
                .to_string_lossy()
                .replace('\\', "/");

            if path.is_dir() {
                paths.insert(relative);
                collect(&path, base, paths)?;
            } else if path.extension().is_some_and(|ext| ext == "rs") {
                paths.insert(relative);
            }
        }
        Ok(())
    }

    /// Harness roots and module lists carry no behavior of their own
    fn is_structural(path: &str) -> bool {
        let file_name = path.rsplit('/').next().unwrap_or(path);
        matches!(file_name, "lib.rs" | "main.rs" | "mod.rs")
    }

    // Tests every source file has a unit test file at the same relative path
    // Verified by deleting tests/unit/math/noise.rs
    #[test]
    fn test_all_src_files_have_unit_tests() {
        let src = relative_paths(Path::new(SRC_DIR)).expect("readable src");
        let unit = relative_paths(Path::new(UNIT_DIR)).expect("readable unit tests");

        let missing: Vec<String> = src
            .iter()
            .filter(|path| !is_structural(path) && !unit.contains(*path))
            .map(|path| format!("  - src/{path} -> tests/unit/{path}"))
            .collect();

        assert!(
            missing.is_empty(),
            "Source files without unit tests:\n{}",
            missing.join("\n")
        );
    }

    // Tests no unit test file outlives its source file
    // Verified by adding tests/unit/math/unused.rs
    #[test]
    fn test_all_unit_tests_have_src_counterparts() {
        let src = relative_paths(Path::new(SRC_DIR)).expect("readable src");
        let unit = relative_paths(Path::new(UNIT_DIR)).expect("readable unit tests");

        let orphaned: Vec<String> = unit
            .iter()
            .filter(|path| !is_structural(path) && !src.contains(*path))
            .map(|path| format!("  - tests/unit/{path} (no src/{path})"))
            .collect();

        assert!(
            orphaned.is_empty(),
            "Unit tests without source files:\n{}",
            orphaned.join("\n")
        );
    }

    // Tests each non-structural test file declares at least one test
    // Verified by emptying tests/unit/io/svg.rs
    #[test]
    fn test_all_test_files_contain_tests() {
        let tests = relative_paths(Path::new("tests")).expect("readable tests");

        let empty: Vec<String> = tests
            .iter()
            .filter(|path| path.ends_with(".rs") && !is_structural(path))
            .filter(|path| {
                !fs::read_to_string(Path::new("tests").join(path))
                    .is_ok_and(|content| content.contains("#[test]"))
            })
            .map(|path| format!("  - tests/{path}"))
            .collect();

        assert!(
            empty.is_empty(),
            "Test files without #[test] functions:\n{}",
            empty.join("\n")
        );
    }

    // Tests every pattern kind has its own builder source file
    // Verified by adding a kind without a builder
    #[test]
    fn test_one_builder_file_per_pattern_kind() {
        let builders = fs::read_dir(Path::new(SRC_DIR).join("geometry/builders"))
            .expect("readable builders")
            .filter_map(Result::ok)
            .filter(|entry| entry.file_name() != "mod.rs")
            .count();
        assert_eq!(builders, PatternKind::ALL.len());
    }
}
