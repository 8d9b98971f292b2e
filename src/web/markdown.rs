//! 学习笔记的 Markdown 渲染

use pulldown_cmark::{html, Event, Options, Parser};

/// 把模型生成的 Markdown 笔记渲染为 HTML
///
/// 模型输出中的原始 HTML 按普通文本转义后输出。
pub fn render_notes_html(markdown: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);

    let parser = Parser::new_ext(markdown, options).map(|event| match event {
        Event::Html(raw) => Event::Text(raw),
        other => other,
    });

    let mut html_output = String::new();
    html::push_html(&mut html_output, parser);
    html_output
}
