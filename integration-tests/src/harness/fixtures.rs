use loghive_core::conf::{JobConfig, JobSpec, Overrides};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Four well-formed lines: three 200s, one 500, two requests from one client.
pub const README_SAMPLE: &str = "\
192.168.1.1,2024-03-01 10:15:32,/index.html,200,Mozilla/5.0
192.168.1.2,2024-03-01 10:15:45,/about.html,200,Chrome/90.0
192.168.1.3,2024-03-01 10:16:01,/contact.html,500,Edge/88.0
192.168.1.1,2024-03-01 10:16:20,/index.html,200,Mozilla/5.0
";

/// A scratch directory holding inputs and the output directory of one test.
pub struct Workspace {
    dir: TempDir,
}

impl Workspace {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().unwrap(),
        }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn out_dir(&self) -> PathBuf {
        self.dir.path().join("out")
    }

    /// Write an input file relative to the workspace and return its path.
    pub fn write_input(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.dir.path().join(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, contents).unwrap();
        path
    }

    /// Job spec reading `input` and writing to [`Self::out_dir`].
    pub fn spec(&self, input: &Path) -> JobSpec {
        let mut spec = JobSpec::default();
        spec.input.path = Some(input.to_path_buf());
        spec.output.dir = self.out_dir();
        spec
    }

    pub fn config(&self, input: &Path) -> JobConfig {
        self.spec(input).validate().unwrap()
    }

    pub fn config_with(&self, input: &Path, overrides: Overrides) -> JobConfig {
        let mut spec = self.spec(input);
        spec.apply(&overrides);
        spec.validate().unwrap()
    }

    pub fn read_output(&self, file: &str) -> String {
        fs::read_to_string(self.out_dir().join(file)).unwrap()
    }

    /// Every file in the output directory, by name.
    pub fn output_files(&self) -> BTreeMap<String, Vec<u8>> {
        fs::read_dir(self.out_dir())
            .unwrap()
            .map(|entry| {
                let entry = entry.unwrap();
                (
                    entry.file_name().to_string_lossy().into_owned(),
                    fs::read(entry.path()).unwrap(),
                )
            })
            .collect()
    }
}

impl Default for Workspace {
    fn default() -> Self {
        Self::new()
    }
}
