use crate::cards::{render_cards, Card};
use crate::content::Registry;
use crate::models::project::Tier;

use super::section_title;

pub fn render(registry: &Registry) -> String {
    let mut html = String::from(
        r#"<section class="container intro">
    <h1>Projects</h1>
    <p class="lead">Featured work first, followed by additional academic and analytics projects. Each project opens a detailed case-study page with models, metrics, tools, and screenshots.</p>
</section>
<section class="container stack">"#,
    );

    for (tier, heading) in [
        (Tier::Featured, "Featured Projects"),
        (Tier::Additional, "Additional Projects"),
    ] {
        let cards: Vec<Card> = registry
            .projects_by_tier(tier)
            .into_iter()
            .map(Card::from_project_listing)
            .collect();
        if cards.is_empty() {
            continue;
        }
        html.push_str(&format!(r#"<div class="panel" id="{}">"#, tier.label().to_lowercase()));
        html.push_str(&section_title(heading));
        html.push_str(&render_cards(&cards, "grid grid-2"));
        html.push_str("</div>");
    }

    html.push_str(r#"</section>
<footer class="container page-footer"><a href="/">← Back to Home</a></footer>"#);
    html
}
