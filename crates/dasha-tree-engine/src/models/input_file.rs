use relative_path::{RelativePath, RelativePathBuf};

/// A discovered dasha text file, addressed relative to the input root.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct InputFile {
    relative_path: RelativePathBuf,
    file_name: String,
    stem: String,
}

impl InputFile {
    pub fn new(relative_path: RelativePathBuf) -> Self {
        let file_name = relative_path.file_name().unwrap_or("").to_string();
        let stem = relative_path
            .file_stem()
            .filter(|s| !s.is_empty())
            .unwrap_or("untitled")
            .to_string();

        Self {
            relative_path,
            file_name,
            stem,
        }
    }

    pub fn from_relative_str(path: &str) -> Self {
        Self::new(RelativePathBuf::from(path))
    }

    pub fn relative_path(&self) -> &RelativePath {
        &self.relative_path
    }

    /// File name including the extension, e.g. `Asha_Devi_1345-JHora.txt`.
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    /// File name without the extension.
    pub fn stem(&self) -> &str {
        &self.stem
    }

    /// Where the JSON document for this file goes, relative to the output root:
    /// `<person folder>/<stem>.json`.
    pub fn output_path(&self, person_folder: &str) -> RelativePathBuf {
        RelativePathBuf::from(person_folder).join(format!("{}.json", self.stem))
    }
}

impl From<RelativePathBuf> for InputFile {
    fn from(path: RelativePathBuf) -> Self {
        Self::new(path)
    }
}

impl From<&str> for InputFile {
    fn from(path: &str) -> Self {
        Self::from_relative_str(path)
    }
}
