mod args;
mod output;

use std::fs;
use std::path::Path;
use std::process;

use anyhow::{bail, Context, Result};
use clap::Parser;
use log::warn;

use code2text::content::{aggregate_contents, normalize_path};
use code2text::totals::{calculate_totals, group_digits};
use code2text::tree::{build_tree, render_tree};
use code2text::{select_files, PatternSpec};

use args::Args;

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();
    run(args)
}

fn run(args: Args) -> Result<()> {
    let root = std::path::absolute(&args.path)
        .with_context(|| format!("failed to resolve path: {}", args.path))?;
    if !root.is_dir() {
        bail!("path does not exist or is not a directory: {}", root.display());
    }

    let target_spec = PatternSpec::new(&args.target);
    let exclude_spec = PatternSpec::new(exclude_patterns(&root, &args.exclude));

    let mut files = select_files(&root, &target_spec, &exclude_spec)?;
    // Sorted so the tree and the contents come out the same across runs and
    // filesystems.
    files.sort();

    println!("path: {}", root.display());
    println!();

    let mut info_padding = 0;
    if args.info {
        let totals = calculate_totals(&root, &files);
        println!("total size : {} bytes", group_digits(totals.size));
        println!("total lines: {}", totals.lines);
        println!("total chars: {}", totals.chars);
        println!();
        info_padding = totals.info_padding;
    }

    let mut result = String::new();

    if args.mode.includes_tree() {
        let tree = build_tree(&files);
        let rendered = render_tree(&tree, args.info, info_padding, &root);
        let block = format!(
            "Tree\n{sep}\n{path}\n{rendered}{sep}\n",
            sep = args.sep,
            path = normalize_path(&args.path),
        );
        println!();
        println!("{block}");
        result.push_str(&block);
    }

    if args.mode.includes_code() || args.copy {
        println!();
        println!();
        println!("Next steps:");
        if args.mode.includes_code() {
            println!(" - collect file contents");
        }
        if args.copy {
            println!(" - copy the result to the clipboard");
        }
        println!();
        if !output::confirm("Continue? (y/n): ")? {
            println!("Aborted.");
            process::exit(1);
        }

        if args.mode.includes_code() {
            let content = aggregate_contents(&root, &files, &args.sep);
            println!();
            println!("{content}");
            result.push_str("\n\n");
            result.push_str(&content);
        }

        if args.copy {
            output::copy_to_clipboard(&result)?;
            println!();
            println!("Copied to clipboard.");
        }
    }

    Ok(())
}

/// Fixed exclusions first, then whatever the scanned directory's .gitignore
/// says, then the user's patterns. Order matters once negations enter.
fn exclude_patterns(root: &Path, user_excludes: &[String]) -> Vec<String> {
    let mut patterns = vec![".git".to_string(), ".gitignore".to_string()];
    let gitignore = root.join(".gitignore");
    if gitignore.exists() {
        match fs::read_to_string(&gitignore) {
            Ok(contents) => patterns.extend(contents.lines().map(str::to_string)),
            Err(err) => warn!("ignoring unreadable {}: {err}", gitignore.display()),
        }
    }
    patterns.extend(user_excludes.iter().cloned());
    patterns
}
