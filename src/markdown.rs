/// Print stylesheet applied to every rendered cover page.
const COVER_STYLE: &str = "\
body { font-family: Helvetica, Arial, sans-serif; margin: 2em; }
h1, h2, h3, h4 { color: #2a4d7c; }
table { border-collapse: collapse; width: 100%; margin-bottom: 1em; }
th, td { border: 1px solid #888; padding: 0.5em; text-align: left; }
th { background: #d5e4f3; }
code { background: #eee; padding: 2px 4px; border-radius: 4px; }
pre { background: #f4f4f4; padding: 1em; border-radius: 4px; }
ul { margin: 1em 0; padding-left: 2em; }
li { margin: 0.5em 0; }
";

/// Converts cover Markdown into a standalone styled HTML document ready for
/// the HTML-to-PDF renderer. Tables and strikethrough are enabled on top of
/// CommonMark.
pub fn to_styled_html(markdown: &str) -> String {
    let mut options = pulldown_cmark::Options::empty();
    options.insert(pulldown_cmark::Options::ENABLE_TABLES);
    options.insert(pulldown_cmark::Options::ENABLE_STRIKETHROUGH);

    let parser = pulldown_cmark::Parser::new_ext(markdown, options);
    let mut body = String::new();
    pulldown_cmark::html::push_html(&mut body, parser);

    format!(
        "<html>\n<head>\n<style>\n{COVER_STYLE}</style>\n</head>\n<body>\n{body}</body>\n</html>\n"
    )
}
