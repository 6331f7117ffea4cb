use std::path::{Path, PathBuf};

/// The command line printed and executed for the book manifest.
#[allow(dead_code)]
pub const BOOK_COMMAND: &str = "pandoc --epub-stylesheet=mystyle.css -S -o main.epub splash.html contents.html chapter1_introduction.html chapter2_installation.html chapter3_basics.html chapter4_interactive_prompt.html chapter5_languages.html chapter6_parsing.html chapter7_evaluation.html chapter8_error_handling.html chapter9_s_expressions.html chapter10_q_expressions.html chapter11_variables.html chapter12_functions.html chapter13_conditionals.html chapter14_strings.html chapter15_standard_library.html chapter16_bonus_projects.html credits.html appendix_a_hand_rolled_parser.html ";

/// Temp workspace with a `bin/` directory for a fake pandoc and a `book/`
/// directory to run it in. TempDir must be kept alive.
#[allow(dead_code)]
pub struct Workspace {
    pub tmp: tempfile::TempDir,
}

#[allow(dead_code)]
impl Workspace {
    pub fn new() -> Self {
        let tmp = tempfile::TempDir::new().expect("create temp dir");
        std::fs::create_dir(tmp.path().join("bin")).expect("create bin dir");
        std::fs::create_dir(tmp.path().join("book")).expect("create book dir");
        Self { tmp }
    }

    pub fn bin_dir(&self) -> PathBuf {
        self.tmp.path().join("bin")
    }

    pub fn book_dir(&self) -> PathBuf {
        self.tmp.path().join("book")
    }

    /// Install a fake pandoc that records its arguments to `args.txt` in
    /// its working directory and exits with `exit_code`.
    #[cfg(unix)]
    pub fn install_fake_pandoc(&self, exit_code: i32) {
        use std::os::unix::fs::PermissionsExt;

        let script = format!(
            "#!/bin/sh\necho fake-pandoc-ran\nprintf '%s\\n' \"$@\" > args.txt\nexit {exit_code}\n"
        );
        let path = self.bin_dir().join("pandoc");
        std::fs::write(&path, script).expect("write fake pandoc");
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755))
            .expect("chmod fake pandoc");
    }

    /// Arguments the fake pandoc received, one per line.
    pub fn recorded_args(&self) -> Vec<String> {
        read_lines(&self.book_dir().join("args.txt"))
    }
}

#[allow(dead_code)]
fn read_lines(path: &Path) -> Vec<String> {
    std::fs::read_to_string(path)
        .unwrap_or_else(|e| panic!("read {}: {e}", path.display()))
        .lines()
        .map(str::to_string)
        .collect()
}

/// The arguments pandoc should receive for the book manifest.
#[allow(dead_code)]
pub fn expected_args() -> Vec<String> {
    BOOK_COMMAND
        .split_whitespace()
        .skip(1)
        .map(str::to_string)
        .collect()
}
