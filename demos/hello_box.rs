use std::io::Read;

use tracing_subscriber::EnvFilter;
use vfs_box::{Addable, BoxError, Finder, Lister, MapBox, Opener, skip_walk};

fn main() -> anyhow::Result<()> {
    // RUST_LOG=vfs_box=trace shows registrations and pruned subtrees
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut site = MapBox::new("site");

    // keys are normalized, so the leading `/` is dropped
    site.add_string("/index.html", "<h1>Hello</h1>")?;
    site.add_string("css/site.css", "h1 { color: teal; }")?;
    site.add_bytes("img/logo.png", &[0x89, b'P', b'N', b'G'])?;

    // entries nobody should see when the site is served
    site.add_dir(".git")?;
    site.add_string(".git/HEAD", "ref: refs/heads/main")?;
    site.add_string("node_modules/left-pad.js", "module.exports = leftPad;")?;

    println!("registered: {:?}", site.list());

    // an empty prefix list means the common defaults: ".", "_", "node_modules", "vendor"
    skip_walk(&site, &[] as &[&str], |path, file| {
        println!("serving {path} ({} bytes)", file.len());
        Ok(())
    })?;

    // every handle has its own cursor and rewinds itself after end-of-content
    let mut page = site.open("index.html")?;
    let mut first = String::new();
    page.read_to_string(&mut first)?;
    let mut second = String::new();
    page.read_to_string(&mut second)?;
    assert_eq!(first, second);
    println!("{first}");

    match site.find("missing.html") {
        Err(BoxError::NotFound(path)) => println!("{path} is not in the box"),
        other => println!("unexpected: {other:?}"),
    }

    Ok(())
}
