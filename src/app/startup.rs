use crate::extract::ImageSource;

const FALLBACK_PROGRAM_NAME: &str = "swatchlens";

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub(super) struct StartupConfig {
    pub(super) image: Option<ImageSource>,
}

impl StartupConfig {
    pub(super) fn from_args() -> Self {
        Self::from_arg_list(std::env::args().skip(1))
    }

    /// First argument that is not a flag names the image. Flags are left to GTK.
    fn from_arg_list<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let image = args
            .into_iter()
            .find(|arg| {
                let arg = arg.as_ref();
                !arg.is_empty() && !arg.starts_with('-')
            })
            .map(|arg| ImageSource::from_arg(arg.as_ref()));
        Self { image }
    }
}

/// Only argv[0] is forwarded so the image argument does not trip GTK's own parsing.
pub(super) fn gtk_launch_args() -> Vec<String> {
    vec![std::env::args()
        .next()
        .unwrap_or_else(|| FALLBACK_PROGRAM_NAME.to_string())]
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    #[test]
    fn first_positional_argument_is_the_image() {
        let config = StartupConfig::from_arg_list(["--verbose", "photo.png", "other.png"]);
        assert_eq!(config.image, Some(ImageSource::File(PathBuf::from("photo.png"))));
    }

    #[test]
    fn url_argument_becomes_url_source() {
        let config = StartupConfig::from_arg_list(["https://example.com/cat.jpg"]);
        assert_eq!(
            config.image,
            Some(ImageSource::Url("https://example.com/cat.jpg".to_string()))
        );
    }

    #[test]
    fn no_positional_argument_leaves_image_unset() {
        let config = StartupConfig::from_arg_list(Vec::<String>::new());
        assert_eq!(config.image, None);
        assert_eq!(StartupConfig::from_arg_list(["-v", ""]).image, None);
    }

    #[test]
    fn gtk_launch_args_holds_only_program_name() {
        assert_eq!(gtk_launch_args().len(), 1);
    }
}
