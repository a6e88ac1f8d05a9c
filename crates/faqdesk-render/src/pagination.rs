//! Page links for the shortcode views.

use crate::html::escape_url;
use crate::options::{LinksType, PaginateArgs};

/// Builds page links from `args`.
///
/// Returns `None` when there is only one page. The current page is a span,
/// every page within `end_size` of either end or `mid_size` of the current
/// page is a link, and each gap collapses into a single ellipsis.
pub fn paginate_links(args: &PaginateArgs) -> Option<String> {
    let total = args.total;
    if total < 2 {
        return None;
    }

    let current = args.current;
    let end_size = args.end_size.max(1);
    let mid_size = args.mid_size;

    let mut links: Vec<String> = Vec::new();
    let mut dots = false;

    if args.prev_next && current > 1 {
        links.push(format!(
            "<a class=\"prev page-numbers\" href=\"{}\">{}</a>",
            escape_url(&page_link(args, current - 1)),
            args.prev_text
        ));
    }

    for n in 1..=total {
        if n == current {
            links.push(format!(
                "<span aria-current=\"page\" class=\"page-numbers current\">{n}</span>"
            ));
            dots = true;
        } else if args.show_all
            || n <= end_size
            || (current > 0
                && n.saturating_add(mid_size) >= current
                && n <= current.saturating_add(mid_size))
            || n > total.saturating_sub(end_size)
        {
            links.push(format!(
                "<a class=\"page-numbers\" href=\"{}\">{n}</a>",
                escape_url(&page_link(args, n))
            ));
            dots = true;
        } else if dots {
            links.push("<span class=\"page-numbers dots\">&hellip;</span>".to_string());
            dots = false;
        }
    }

    if args.prev_next && current > 0 && current < total {
        links.push(format!(
            "<a class=\"next page-numbers\" href=\"{}\">{}</a>",
            escape_url(&page_link(args, current + 1)),
            args.next_text
        ));
    }

    Some(match args.kind {
        LinksType::Plain => links.join("\n"),
        LinksType::List => format!(
            "<ul class='page-numbers'>\n\t<li>{}</li>\n</ul>\n",
            links.join("</li>\n\t<li>")
        ),
    })
}

/// Link to page `n`; page 1 drops the format so it points at the base URL.
fn page_link(args: &PaginateArgs, n: u64) -> String {
    let fragment = if n == 1 { "" } else { args.format.as_str() };
    args.base
        .replace("%_%", fragment)
        .replace("%#%", &n.to_string())
}
