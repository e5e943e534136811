pub(super) const ROOT_LONG_ABOUT: &str = "\
Replaces out-of-date mimetype icons with their category template

An icon theme keeps one template icon per mimetype category (text, video, image,
audio) and many per-type variants derived from it. iconcopier compares the byte
size of every variant with its category template and, where they differ, replaces
the variant with a copy of the template through the version-control tool, so the
working copy records the change as a copy instead of an unrelated new file.

LAYOUT:

  Run from the theme root. Icons are expected in scalable/mimetypes, named
  {category}-{suffix}.svgz, next to {category}-template.svgz:

    scalable/mimetypes/image-template.svgz
    scalable/mimetypes/image-png.svgz
    scalable/mimetypes/audio-template.svgz
    scalable/mimetypes/audio-x-wav.svgz
    ...

  The set of categories and suffixes is built in. Missing and empty files have
  no size, so a pair where both files are missing counts as identical.

COMMIT FILE:

  Every replacement appends a line to ./commit:

    image-template.svgz COPIED TO image-png.svgz

  The file is meant to be used as the commit message afterwards, for example
  with 'svn commit -F commit'. If it already exists you are asked whether to
  replace it. Answering n or no keeps the old content and appends to it; any
  other answer, including just pressing enter, starts from an empty file.

VERSION CONTROL:

  --vcs svn    svn rm <icon>; svn cp <template> <icon>   (default)
  --vcs git    git rm <icon>; copy <template> <icon>; git add <icon>
  --vcs plain  remove and copy without version control

  A failing command is logged as a warning by default and the run continues.
  Use --on-vcs-failure abort to stop at the first failure, or ignore to stay
  silent.

EXIT STATUS:

  0    All pairs were processed
  255  An error stopped the run (missing icon directory, unreadable commit
       file, or a failed command with --on-vcs-failure abort)

EXAMPLES:

  Preview which icons would be replaced:
    $ iconcopier --dry-run -v

  Sync a theme checked out elsewhere, using git:
    $ iconcopier -C ~/src/mono --vcs git
    $ cd ~/src/mono && git commit -F commit
";
