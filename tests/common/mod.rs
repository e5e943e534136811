use assert_cmd::{Command, cargo::cargo_bin_cmd};
use std::fs;
use std::path::{Path, PathBuf};

pub const THEME: [(&str, &[&str]); 4] = [
    ("text", &["css", "sgml", "x-generic", "enriched", "rtf"]),
    (
        "video",
        &[
            "mp4", "mpeg", "x-flic", "x-generic", "x-matroska", "x-ms-asf", "x-msvideo",
            "x-ms-wmv", "x-ogm+ogg",
        ],
    ),
    (
        "image",
        &[
            "bmp", "cgm", "fax-g3", "gif", "jp2", "jpeg", "png", "tiff", "x-applix-graphics",
            "x-dcraw", "x-dds", "x-exr", "x-fits", "x-generic", "x-hdr", "x-ico", "x-jng",
            "x-msod", "x-pcx", "x-photo-cd", "x-portable-bitmap", "x-portable-graymap",
            "x-portable-pixmap", "x-rgb", "x-tga", "x-xbitmap", "x-xcf", "x-xpixmap",
        ],
    ),
    (
        "audio",
        &[
            "aac", "ac3", "basic", "mp4", "mpeg", "x-adpcm", "x-aiff", "x-flac+ogg", "x-flac",
            "x-generic", "x-matroska", "x-mod", "x-monkey", "x-mp2", "x-mpegurl", "x-ms-wma",
            "x-musepack", "x-scpls", "x-speex+ogg", "x-vorbis+ogg", "x-wav",
        ],
    ),
];

/// Runs iconcopier from `cwd` without touching any version control.
pub fn copier_cmd(cwd: &Path) -> Command {
    let mut cmd = copier_cmd_with_vcs(cwd);
    cmd.arg("--vcs").arg("plain");
    cmd
}

/// Runs iconcopier from `cwd`; the test picks the `--vcs` tool.
pub fn copier_cmd_with_vcs(cwd: &Path) -> Command {
    let mut cmd = cargo_bin_cmd!("iconcopier");
    cmd.arg("-C").arg(cwd);
    cmd
}

pub fn icon_dir(root: &Path) -> PathBuf {
    root.join("scalable/mimetypes")
}

/// Fills `dir` with an 8 byte template per category and a variant of the
/// same size for every suffix, so a run finds nothing to replace.
pub fn populate_theme(dir: &Path) {
    fs::create_dir_all(dir).unwrap();
    for (category, suffixes) in THEME {
        fs::write(dir.join(format!("{category}-template.svgz")), "template").unwrap();
        for suffix in suffixes {
            fs::write(dir.join(format!("{category}-{suffix}.svgz")), "12345678").unwrap();
        }
    }
}

/// Creates a matching theme in `root/scalable/mimetypes`.
pub fn theme(root: &Path) -> PathBuf {
    let dir = icon_dir(root);
    populate_theme(&dir);
    dir
}

// Only some test crates inspect the commit file.
#[allow(dead_code)]
pub fn commit_content(root: &Path) -> String {
    fs::read_to_string(root.join("commit")).expect("commit file should exist")
}
