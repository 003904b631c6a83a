//! Static SEO descriptors and the renderers that turn them into the
//! `robots.txt` and `sitemap.xml` bodies.

/// A single crawl directive for `robots.txt`.
pub struct CrawlRule {
    pub path: &'static str,
    pub allow: bool,
}

pub const CRAWL_RULES: &[CrawlRule] = &[
    CrawlRule {
        path: "/",
        allow: true,
    },
    CrawlRule {
        path: "/json",
        allow: false,
    },
];

/// A fixed sitemap entry; `path` is joined onto the configured site URL.
pub struct SitemapEntry {
    pub path: &'static str,
    pub priority: f32,
}

pub const SITEMAP_ENTRIES: &[SitemapEntry] = &[
    SitemapEntry {
        path: "/",
        priority: 1.0,
    },
    SitemapEntry {
        path: "/practice",
        priority: 0.8,
    },
    SitemapEntry {
        path: "/dashboard",
        priority: 0.5,
    },
];

pub fn render_robots(site_url: &str) -> String {
    let mut body = String::from("User-agent: *\n");
    for rule in CRAWL_RULES {
        let directive = if rule.allow { "Allow" } else { "Disallow" };
        body.push_str(&format!("{directive}: {}\n", rule.path));
    }
    body.push_str(&format!("\nSitemap: {site_url}/sitemap.xml\n"));
    body
}

pub fn render_sitemap(site_url: &str) -> String {
    let mut body = String::from(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
         <urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">\n",
    );
    for entry in SITEMAP_ENTRIES {
        body.push_str(&format!(
            "  <url>\n    <loc>{site_url}{}</loc>\n    <priority>{:.1}</priority>\n  </url>\n",
            entry.path, entry.priority
        ));
    }
    body.push_str("</urlset>\n");
    body
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn robots_allows_root_and_blocks_json() {
        let body = render_robots("https://scio.test");

        assert!(body.starts_with("User-agent: *\n"));
        assert!(body.contains("Allow: /\n"));
        assert!(body.contains("Disallow: /json\n"));
        assert!(body.contains("Sitemap: https://scio.test/sitemap.xml"));
    }

    #[test]
    fn sitemap_lists_the_three_fixed_urls_with_priorities() {
        let body = render_sitemap("https://scio.test");

        assert!(body.contains("<loc>https://scio.test/</loc>"));
        assert!(body.contains("<loc>https://scio.test/practice</loc>"));
        assert!(body.contains("<loc>https://scio.test/dashboard</loc>"));
        assert!(body.contains("<priority>1.0</priority>"));
        assert!(body.contains("<priority>0.8</priority>"));
        assert!(body.contains("<priority>0.5</priority>"));
        assert_eq!(body.matches("<url>").count(), 3);
    }
}
