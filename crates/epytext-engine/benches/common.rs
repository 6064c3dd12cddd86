// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
#[allow(dead_code)]
pub fn generate_docstring(sections: usize) -> String {
    let mut content = String::from("Summary line with B{bold} and C{code}.\n\n");

    for section in 0..sections {
        let title = format!("Section {section}");
        content.push_str(&format!("{title}\n{}\n\n", "=".repeat(title.len())));
        content.push_str(
            "Some paragraph content with I{markup}, a U{link <https://example.org>}\n\
             and a L{cross.reference} spread over two lines.\n\n",
        );
        for i in 0..3 {
            content.push_str(&format!("  - item {i} with E{{lb}}braces E{{rb}}\n"));
            content.push_str("    - nested item\n");
        }
        content.push_str("\nExample::\n\n    x = compute(1)\n    print(x)\n\n");
        content.push_str(">>> compute(2)\n4\n\n");
    }

    for i in 0..sections {
        content.push_str(&format!("@param arg{i}: argument number {i}\n"));
        content.push_str(&format!("@type arg{i}: C{{int}}\n"));
    }
    content.push_str("@return: the result\n@rtype: int\n@note: generated\n");
    content
}

#[allow(dead_code)]
pub fn generate_nested_lists(depth: usize) -> String {
    (0..depth)
        .map(|level| format!("{}- level {level}\n", "  ".repeat(level)))
        .collect()
}
