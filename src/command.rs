use crate::manifest::Manifest;
use serde::Serialize;

pub const TOOL: &str = "pandoc";
pub const STYLESHEET: &str = "mystyle.css";
pub const OUTPUT_FILE: &str = "main.epub";

/// Tool invocation, stylesheet, smart-typography flag and output path.
pub const PREFIX: &str = "pandoc --epub-stylesheet=mystyle.css -S -o main.epub ";

/// Build the full command string: the prefix followed by every manifest
/// entry in order. Entries carry their own trailing space.
pub fn build_command(manifest: &Manifest) -> String {
    let mut cmd = String::from(PREFIX);
    for entry in manifest.entries() {
        cmd.push_str(entry);
    }
    cmd
}

/// The same invocation as [`build_command`], split into a program and an
/// argument list so it can be spawned without a shell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommandLine {
    program: String,
    args: Vec<String>,
    #[serde(rename = "command")]
    shell: String,
    fragments: usize,
}

impl CommandLine {
    pub fn from_manifest(manifest: &Manifest) -> Self {
        let mut args = vec![
            format!("--epub-stylesheet={STYLESHEET}"),
            "-S".to_string(),
            "-o".to_string(),
            OUTPUT_FILE.to_string(),
        ];
        args.extend(manifest.file_names().map(str::to_string));

        Self {
            program: TOOL.to_string(),
            args,
            shell: build_command(manifest),
            fragments: manifest.len(),
        }
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }

    /// Fragment arguments, without the leading flags.
    pub fn fragments(&self) -> &[String] {
        &self.args[self.args.len() - self.fragments..]
    }

    /// The command string handed to the shell and echoed to stdout.
    pub fn to_shell_string(&self) -> &str {
        &self.shell
    }
}
