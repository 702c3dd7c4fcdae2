//! Page rendering for the HTTP handlers.

use guildhall_domain::Adventurer;

use crate::infrastructure::templates::{TemplateContext, TemplateError, TemplateRenderer};

pub const HOME: &str = "home.html";
pub const CREATE: &str = "create.html";
pub const PROFILE: &str = "profil.html";
pub const ADVENTURER_CARD: &str = "adventurer_card.html";

/// Full roster page: one card fragment per adventurer, in roster order.
pub async fn render_profile(
    templates: &TemplateRenderer,
    adventurers: &[Adventurer],
) -> Result<String, TemplateError> {
    let card = templates.load(ADVENTURER_CARD).await?;
    let mut cards = String::new();
    for adventurer in adventurers {
        cards.push_str(&card.render(&card_context(adventurer))?);
    }

    let context = TemplateContext::new()
        .insert("count", adventurers.len().to_string())
        .insert_raw("adventurers", cards);
    templates.render(PROFILE, &context).await
}

fn card_context(adventurer: &Adventurer) -> TemplateContext {
    TemplateContext::new()
        .insert("id", adventurer.id().to_string())
        .insert("name", adventurer.name().as_str())
        .insert("class", adventurer.class().as_str())
        .insert("level", adventurer.level().to_string())
        .insert("health", adventurer.health().to_string())
        .insert("health_max", adventurer.health_max().to_string())
        .insert("defense", adventurer.defense().to_string())
        .insert("attack", adventurer.attack().to_string())
        .insert("speed", adventurer.speed().to_string())
        .insert("avatar", adventurer.avatar())
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use guildhall_domain::{AdventurerDraft, AdventurerId, CharacterClass};

    use super::*;

    fn shipped_templates() -> TemplateRenderer {
        TemplateRenderer::new(concat!(env!("CARGO_MANIFEST_DIR"), "/../../templates"))
    }

    #[tokio::test]
    async fn shipped_pages_render() {
        let templates = shipped_templates();
        for page in [HOME, CREATE] {
            let html = templates
                .render(page, &TemplateContext::new())
                .await
                .expect("page renders");
            assert!(html.contains("<html"), "{page}");
        }
    }

    #[tokio::test]
    async fn shipped_profile_renders_cards() {
        let draft = AdventurerDraft::from_form("Legolas", "archer", "7").expect("valid draft");
        let legolas = Adventurer::new(AdventurerId::new(4), draft);

        let html = render_profile(&shipped_templates(), &[legolas])
            .await
            .expect("profile renders");

        assert!(html.contains("Legolas"));
        assert!(html.contains("/static/archer.jpg"));
        assert!(html.contains("/delete?id=4"));
        assert!(html.contains("/modify?id=4"));
        assert!(html.contains("Vie : 90 / 90"));
    }

    #[test]
    fn every_class_avatar_is_shipped() {
        let static_dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("../../static");
        for class in ["guerrier", "mage", "archer", "ninja"] {
            let avatar = CharacterClass::from(class).template().avatar;
            assert!(static_dir.join(avatar).is_file(), "missing {avatar}");
        }
    }
}
