use xregex::{Flags, Regex};

fn main() {
    let mut args = std::env::args().skip(1);
    let patterns: Vec<(String, String)> = match (args.next(), args.next()) {
        (Some(pattern), flags) => vec![(pattern, flags.unwrap_or_default())],
        (None, _) => [
            (r"(?<year>\d{4})-(?<month>\d{2})", ""),
            ("(?x) a b # comment\n c", ""),
            (r"\p{Greek}+ [\p{Lu}\d]", ""),
            ("a.b", "s"),
            ("(a)(?<b>b)", "n"),
        ]
        .into_iter()
        .map(|(pattern, flags)| (pattern.to_string(), flags.to_string()))
        .collect(),
    };

    for (pattern, flags) in patterns {
        println!("\nPattern: {pattern:?} /{flags}");
        match Regex::with_flags(&pattern, &flags) {
            Ok(regex) => {
                let native = regex.native_source();
                if let Some((cut, _)) = native.char_indices().nth(120) {
                    println!("  Native: {:?}... ({} bytes)", &native[..cut], native.len());
                } else {
                    println!("  Native: {native:?}");
                }
                println!("  Flags: {}", regex.flags());
                println!("  Groups: {}", regex.captures_len());
                if let Some(names) = regex.capture_names() {
                    println!("  Names: {names:?}");
                }
                println!("  Sticky: {}", regex.flags().contains(Flags::STICKY));
            }
            Err(e) => {
                println!("  Error: {e}");
            }
        }
    }
}
