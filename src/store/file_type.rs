use serde::{Deserialize, Serialize};

/// File type derived from a file name's extension.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileType {
    Html,
    Css,
    Js,
    Jsx,
    Ts,
    Tsx,
    Php,
    Py,
    Json,
    Txt,
    Png,
    Jpg,
    Gif,
    Mp3,
    Mp4,
    Pdf,
}

impl FileType {
    /// Classify by the last dot-separated segment; anything unrecognized
    /// is plain text.
    pub fn from_name(name: &str) -> Self {
        let ext = name.rsplit('.').next().unwrap_or("").to_ascii_lowercase();
        match ext.as_str() {
            "html" => FileType::Html,
            "css" => FileType::Css,
            "js" => FileType::Js,
            "jsx" => FileType::Jsx,
            "ts" => FileType::Ts,
            "tsx" => FileType::Tsx,
            "php" => FileType::Php,
            "py" => FileType::Py,
            "json" => FileType::Json,
            "png" => FileType::Png,
            "jpg" | "jpeg" => FileType::Jpg,
            "gif" => FileType::Gif,
            "mp3" => FileType::Mp3,
            "mp4" => FileType::Mp4,
            "pdf" => FileType::Pdf,
            _ => FileType::Txt,
        }
    }

    /// Language tag used by the syntax tables.
    pub fn tag(&self) -> &'static str {
        match self {
            FileType::Html => "html",
            FileType::Css => "css",
            FileType::Js => "js",
            FileType::Jsx => "jsx",
            FileType::Ts => "ts",
            FileType::Tsx => "tsx",
            FileType::Php => "php",
            FileType::Py => "py",
            FileType::Json => "json",
            FileType::Txt => "txt",
            FileType::Png => "png",
            FileType::Jpg => "jpg",
            FileType::Gif => "gif",
            FileType::Mp3 => "mp3",
            FileType::Mp4 => "mp4",
            FileType::Pdf => "pdf",
        }
    }

    pub fn is_media(&self) -> bool {
        matches!(
            self,
            FileType::Png
                | FileType::Jpg
                | FileType::Gif
                | FileType::Mp3
                | FileType::Mp4
                | FileType::Pdf
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_name() {
        assert_eq!(FileType::from_name("index.html"), FileType::Html);
        assert_eq!(FileType::from_name("app.test.tsx"), FileType::Tsx);
        assert_eq!(FileType::from_name("photo.JPEG"), FileType::Jpg);
        assert_eq!(FileType::from_name("README"), FileType::Txt);
        assert_eq!(FileType::from_name("weird.xyz"), FileType::Txt);
    }

    #[test]
    fn test_media_predicate() {
        assert!(FileType::Png.is_media());
        assert!(FileType::Pdf.is_media());
        assert!(!FileType::Js.is_media());
        assert!(!FileType::Txt.is_media());
    }
}
