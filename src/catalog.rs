//! The fixed table of icon categories and their variant suffixes.
//!
//! Every icon variant lives next to a per-category template as
//! `{category}-{suffix}.svgz`. The lists are curated by hand and
//! the order here is the order in which a run visits them.

pub struct Category {
    pub label: &'static str,
    pub suffixes: &'static [&'static str],
}

impl Category {
    pub fn template_file_name(&self) -> String {
        format!("{}-template.svgz", self.label)
    }

    pub fn icon_file_name(&self, suffix: &str) -> String {
        format!("{}-{}.svgz", self.label, suffix)
    }
}

pub static CATEGORIES: [Category; 4] = [
    Category {
        label: "text",
        suffixes: &["css", "sgml", "x-generic", "enriched", "rtf"],
    },
    Category {
        label: "video",
        suffixes: &[
            "mp4",
            "mpeg",
            "x-flic",
            "x-generic",
            "x-matroska",
            "x-ms-asf",
            "x-msvideo",
            "x-ms-wmv",
            "x-ogm+ogg",
        ],
    },
    Category {
        label: "image",
        suffixes: &[
            "bmp",
            "cgm",
            "fax-g3",
            "gif",
            "jp2",
            "jpeg",
            "png",
            "tiff",
            "x-applix-graphics",
            "x-dcraw",
            "x-dds",
            "x-exr",
            "x-fits",
            "x-generic",
            "x-hdr",
            "x-ico",
            "x-jng",
            "x-msod",
            "x-pcx",
            "x-photo-cd",
            "x-portable-bitmap",
            "x-portable-graymap",
            "x-portable-pixmap",
            "x-rgb",
            "x-tga",
            "x-xbitmap",
            "x-xcf",
            "x-xpixmap",
        ],
    },
    Category {
        label: "audio",
        suffixes: &[
            "aac",
            "ac3",
            "basic",
            "mp4",
            "mpeg",
            "x-adpcm",
            "x-aiff",
            "x-flac+ogg",
            "x-flac",
            "x-generic",
            "x-matroska",
            "x-mod",
            "x-monkey",
            "x-mp2",
            "x-mpegurl",
            "x-ms-wma",
            "x-musepack",
            "x-scpls",
            "x-speex+ogg",
            "x-vorbis+ogg",
            "x-wav",
        ],
    },
];

/// Every `(category, suffix)` pair of the table, in table order.
pub fn pairs() -> impl Iterator<Item = (&'static Category, &'static str)> {
    CATEGORIES
        .iter()
        .flat_map(|category| category.suffixes.iter().map(move |suffix| (category, *suffix)))
}
