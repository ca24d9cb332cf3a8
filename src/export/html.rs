//! Static HTML rendering of a `Document`.

use crate::models::{Link, HTML_BREAKPOINT_PX};
use crate::view::{Document, NavLink, Section, SectionBody};

/// Escape text for use in element content and quoted attributes
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

fn link_html(link: &Link, class: &str) -> String {
    let mut attrs = format!("href=\"{}\"", escape(&link.href()));
    if !class.is_empty() {
        attrs.push_str(&format!(" class=\"{}\"", class));
    }
    if let Some(rel) = link.rel() {
        attrs.push_str(&format!(" target=\"_blank\" rel=\"{}\"", rel));
    }
    format!("<a {}>{}</a>", attrs, escape(link.label))
}

fn nav_link_html(link: &NavLink) -> String {
    // Marks links whose activation closes the menu
    let dismiss = if link.dismisses_menu {
        " data-dismiss-menu"
    } else {
        ""
    };
    format!(
        "<a href=\"{}\"{}>{}</a>",
        link.href(),
        dismiss,
        escape(link.label)
    )
}

fn push_list(html: &mut String, items: &[&str], class: &str) {
    html.push_str(&format!("<ul class=\"{}\">\n", class));
    for item in items {
        html.push_str(&format!("<li>{}</li>\n", escape(item)));
    }
    html.push_str("</ul>\n");
}

fn push_section(html: &mut String, section: &Section) {
    match section.anchor() {
        Some(anchor) => html.push_str(&format!("<section id=\"{}\">\n", anchor)),
        None => html.push_str("<section>\n"),
    }

    if matches!(section.body, SectionBody::Hero { .. }) {
        html.push_str(&format!("<h1>{}</h1>\n", escape(section.heading)));
    } else {
        html.push_str(&format!("<h2>{}</h2>\n", escape(section.heading)));
    }
    if let Some(subtitle) = section.subtitle {
        html.push_str(&format!("<p class=\"lead\">{}</p>\n", escape(subtitle)));
    }

    match &section.body {
        SectionBody::Hero {
            headline,
            tagline,
            actions,
        } => {
            html.push_str(&format!("<p class=\"headline\">{}</p>\n", escape(headline)));
            html.push_str(&format!("<p class=\"tagline\">{}</p>\n", escape(tagline)));
            html.push_str("<div class=\"actions\">\n");
            for action in actions {
                html.push_str(&link_html(action, "button"));
                html.push('\n');
            }
            html.push_str("</div>\n");
        }
        SectionBody::Projects(projects) => {
            for project in projects.iter() {
                html.push_str("<article class=\"card\">\n");
                html.push_str(&format!("<h3>{}</h3>\n", escape(project.title)));
                html.push_str(&format!("<p class=\"lead\">{}</p>\n", escape(project.subtitle)));
                html.push_str(&format!(
                    "<h4>Context</h4>\n<p>{}</p>\n",
                    escape(project.context)
                ));
                html.push_str(&format!("<h4>Role</h4>\n<p>{}</p>\n", escape(project.role)));
                html.push_str("<h4>Technical Decisions</h4>\n");
                push_list(html, project.decisions, "ruled");
                html.push_str("<h4>Impact</h4>\n");
                push_list(html, project.impact, "ruled impact");
                html.push_str(&format!(
                    "<p class=\"stack\"><strong>Stack:</strong> {}</p>\n",
                    escape(project.stack)
                ));
                html.push_str("</article>\n");
            }
        }
        SectionBody::Philosophy(entries) => {
            html.push_str("<div class=\"grid\">\n");
            for entry in entries.iter() {
                html.push_str(&format!(
                    "<div class=\"card\">\n<h3>{}</h3>\n<p>{}</p>\n</div>\n",
                    escape(entry.title),
                    escape(entry.content)
                ));
            }
            html.push_str("</div>\n");
        }
        SectionBody::Capabilities(categories) => {
            html.push_str("<div class=\"grid\">\n");
            for category in categories.iter() {
                html.push_str(&format!("<div>\n<h3>{}</h3>\n", escape(category.name)));
                push_list(html, category.skills, "plain");
                html.push_str("</div>\n");
            }
            html.push_str("</div>\n");
        }
        SectionBody::Experience(entries) => {
            for entry in entries.iter() {
                html.push_str(&format!("<h3>{}</h3>\n", escape(&entry.heading())));
                html.push_str(&format!("<p class=\"lead\">{}</p>\n", escape(entry.period)));
                push_list(html, entry.highlights, "ruled");
            }
        }
        SectionBody::About {
            paragraphs,
            availability,
        } => {
            for paragraph in paragraphs.iter() {
                html.push_str(&format!("<p>{}</p>\n", escape(paragraph)));
            }
            html.push_str(&format!("<p class=\"lead\">{}</p>\n", escape(availability)));
        }
        SectionBody::Contact(links) => {
            html.push_str("<div class=\"actions\">\n");
            for link in links.iter() {
                html.push_str(&link_html(link, "button"));
                html.push('\n');
            }
            html.push_str("</div>\n");
        }
    }

    html.push_str("</section>\n");
}

// Toggles the overlay on the menu button and closes it again from any
// data-dismiss-menu link. The overlay is built from the template so a closed
// page carries no overlay markup until the button is pressed.
const MENU_SCRIPT: &str = r#"(function () {
  var nav = document.querySelector('nav');
  var toggle = nav && nav.querySelector('.nav-toggle');
  var links = document.getElementById('nav-overlay-links');
  if (!toggle || !links) return;
  function overlay() { return nav.querySelector('.nav-overlay'); }
  function setExpanded(open) {
    toggle.setAttribute('aria-expanded', open ? 'true' : 'false');
    toggle.textContent = open ? '\u2715' : '\u2630';
  }
  function dismiss() {
    var current = overlay();
    if (current) current.remove();
    setExpanded(false);
  }
  function open() {
    var panel = document.createElement('div');
    panel.className = 'nav-overlay';
    panel.appendChild(links.content.cloneNode(true));
    nav.appendChild(panel);
    setExpanded(true);
  }
  toggle.addEventListener('click', function () {
    if (overlay()) { dismiss(); } else { open(); }
  });
  nav.addEventListener('click', function (event) {
    if (event.target.closest('a[data-dismiss-menu]')) dismiss();
  });
})();"#;

/// Overlay links for the menu script plus the script itself
fn push_menu_script(html: &mut String, links: &[NavLink]) {
    html.push_str("<template id=\"nav-overlay-links\">\n");
    for link in links {
        let dismissing = NavLink {
            dismisses_menu: true,
            ..*link
        };
        html.push_str(&nav_link_html(&dismissing));
        html.push('\n');
    }
    html.push_str("</template>\n");
    html.push_str("<script>\n");
    html.push_str(MENU_SCRIPT);
    html.push_str("\n</script>\n");
}

/// Format the document as a standalone HTML page with embedded CSS
pub fn render(doc: &Document, title: &str) -> String {
    let mut html = String::with_capacity(16 * 1024);

    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    html.push_str("<meta charset=\"UTF-8\">\n");
    html.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    html.push_str(&format!("<title>{}</title>\n", escape(title)));
    html.push_str("<style>\n");
    html.push_str("body { font-family: system-ui, sans-serif; margin: 0; color: #111827; }\n");
    html.push_str("nav { position: sticky; top: 0; background: #fff; border-bottom: 1px solid #e5e7eb; }\n");
    html.push_str(".bar { max-width: 64rem; margin: 0 auto; padding: 1rem 1.5rem; display: flex; justify-content: space-between; align-items: center; }\n");
    html.push_str(".nav-desktop a, .nav-overlay a { margin-left: 2rem; color: #4b5563; text-decoration: none; }\n");
    html.push_str(".nav-overlay { border-top: 1px solid #e5e7eb; padding: 1rem 1.5rem; display: flex; flex-direction: column; gap: 1rem; }\n");
    html.push_str(".nav-overlay a { margin-left: 0; }\n");
    html.push_str("section { max-width: 64rem; margin: 0 auto; padding: 5rem 1.5rem; }\n");
    html.push_str(".lead { color: #4b5563; }\n");
    html.push_str(".card { padding: 2rem; border: 1px solid #e5e7eb; border-radius: 0.5rem; margin-bottom: 2rem; }\n");
    html.push_str(".grid { display: grid; gap: 2rem; }\n");
    html.push_str("ul.ruled { list-style: none; padding: 0; }\n");
    html.push_str("ul.ruled li { padding-left: 1rem; border-left: 2px solid #d1d5db; margin-bottom: 0.5rem; }\n");
    html.push_str("ul.impact li { border-left-color: #3b82f6; }\n");
    html.push_str("ul.plain { list-style: none; padding: 0; }\n");
    html.push_str(".actions { display: flex; flex-wrap: wrap; gap: 1rem; }\n");
    html.push_str(".button { padding: 0.75rem 1.5rem; border: 2px solid #111827; border-radius: 0.5rem; color: #111827; text-decoration: none; }\n");
    html.push_str("footer { text-align: center; color: #4b5563; padding: 2rem 1.5rem; border-top: 1px solid #e5e7eb; }\n");
    html.push_str(".nav-toggle { background: none; border: none; font-size: 1.5rem; }\n");
    html.push_str(&format!(
        "@media (min-width: {}px) {{ .nav-toggle, .nav-overlay {{ display: none; }} .grid {{ grid-template-columns: 1fr 1fr; }} }}\n",
        HTML_BREAKPOINT_PX
    ));
    html.push_str(&format!(
        "@media (max-width: {}px) {{ .nav-desktop {{ display: none; }} }}\n",
        HTML_BREAKPOINT_PX - 1
    ));
    html.push_str("</style>\n</head>\n<body>\n");

    // Navigation
    html.push_str("<nav>\n<div class=\"bar\">\n");
    html.push_str(&link_html(&doc.header.brand, "brand"));
    html.push('\n');
    if let Some(links) = &doc.header.inline_links {
        html.push_str("<div class=\"nav-desktop\">\n");
        for link in links {
            html.push_str(&nav_link_html(link));
            html.push('\n');
        }
        html.push_str("</div>\n");
    }
    if let Some(toggle) = &doc.header.toggle {
        let glyph = if toggle.expanded { "&#x2715;" } else { "&#x2630;" };
        html.push_str(&format!(
            "<button class=\"nav-toggle\" aria-label=\"{}\" aria-expanded=\"{}\">{}</button>\n",
            toggle.label(),
            toggle.expanded,
            glyph
        ));
    }
    html.push_str("</div>\n");
    if let Some(overlay) = &doc.overlay {
        html.push_str("<div class=\"nav-overlay\">\n");
        for link in &overlay.links {
            html.push_str(&nav_link_html(link));
            html.push('\n');
        }
        html.push_str("</div>\n");
    }
    html.push_str("</nav>\n<main>\n");

    for section in &doc.sections {
        push_section(&mut html, section);
    }

    html.push_str("</main>\n");
    html.push_str(&format!("<footer>\n<p>{}</p>\n</footer>\n", escape(&doc.footer)));
    if let (Some(_), Some(links)) = (&doc.header.toggle, &doc.header.inline_links) {
        push_menu_script(&mut html, links);
    }
    html.push_str("</body>\n</html>\n");

    html
}
