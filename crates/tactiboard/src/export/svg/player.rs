//! Player glyphs: jersey, role label, orientation indicator and ball.

use svg::node::element as svg_element;

use tactiboard_core::{
    apply_stroke,
    color::Color,
    draw::{
        Drawable, LayeredOutput, RenderLayer, StrokeDefinition, StrokeJoin, Text, TextBaseline,
        TextDefinition, jersey,
    },
    geometry::Point,
    scene::{Player, Role, Team},
};

/// Jersey size on the canvas.
const JERSEY_SIZE: f32 = 8.0;
const ICON_BOX: f32 = 64.0;
const BALL_SIZE: f32 = 3.0;

/// Color convention of a player jersey.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kit {
    /// White jersey, navy outline
    Home,
    /// Orange jersey, dark red outline
    Away,
    /// Yellow jersey, brown outline
    Goalkeeper,
}

impl Kit {
    /// Picks the kit of a player.
    ///
    /// The goalkeeper labels `G` and `GB` win over team and role, so a
    /// goalkeeper of the second team still wears yellow.
    pub fn for_player(player: &Player) -> Self {
        if matches!(player.label(), "G" | "GB") {
            Self::Goalkeeper
        } else if player.team() == Team::Team2 || player.role() == Role::Defender {
            Self::Away
        } else {
            Self::Home
        }
    }

    /// Returns the fill and outline colors.
    pub fn colors(self) -> (Color, Color) {
        let (fill, stroke) = match self {
            Self::Home => ("#ffffff", "#1e3a8a"),
            Self::Away => ("#f4a261", "#7c2d12"),
            Self::Goalkeeper => ("#fde047", "#854d0e"),
        };
        (
            Color::parse_or(Some(fill), Color::default()),
            Color::parse_or(Some(stroke), Color::default()),
        )
    }
}

/// The ball carried by a player, centered on `center`.
pub fn ball(center: Point, size: f32) -> svg_element::Group {
    let ink = StrokeDefinition::solid(Color::parse_or(Some("#111"), Color::default()), 3.0);
    let body = svg_element::Circle::new()
        .set("cx", 32)
        .set("cy", 32)
        .set("r", 12)
        .set("fill", "#f4a261");
    let seam = svg_element::Path::new()
        .set("d", "M24 24c6 2 8 8 16 8")
        .set("fill", "none");
    let seam_ink = StrokeDefinition::solid(ink.color(), 2.0);

    svg_element::Group::new()
        .set(
            "transform",
            format!(
                "translate({}, {}) scale({})",
                center.x() - size,
                center.y() - size,
                size * 2.0 / ICON_BOX
            ),
        )
        .add(apply_stroke!(body, &ink))
        .add(apply_stroke!(seam, &seam_ink))
}

/// A player ready to draw.
pub struct PlayerGlyph<'a> {
    player: &'a Player,
    font_family: &'a str,
}

impl<'a> PlayerGlyph<'a> {
    pub fn new(player: &'a Player, font_family: &'a str) -> Self {
        Self {
            player,
            font_family,
        }
    }

    /// Text drawn on the jersey: the label, or the id when the label is empty.
    pub fn caption(&self) -> &'a str {
        if self.player.label().is_empty() {
            self.player.id()
        } else {
            self.player.label()
        }
    }

    fn orientation_indicator(&self, color: Color) -> svg_element::Group {
        let half = JERSEY_SIZE / 2.0;
        let tip = svg_element::Path::new()
            .set(
                "d",
                format!("M 0 -{} L -1.5 -{half} L 1.5 -{half} Z", half + 2.0),
            )
            .set("fill", color)
            .set("stroke", "none");
        svg_element::Group::new()
            .set("transform", format!("rotate({})", self.player.orientation()))
            .add(tip)
    }

    fn shirt(&self, fill: Color, stroke: Color) -> svg_element::Group {
        let half = JERSEY_SIZE / 2.0;
        let outline = StrokeDefinition::solid(stroke, 3.0).with_join(StrokeJoin::Round);
        let label_style = TextDefinition::new(18.0)
            .with_font_family(self.font_family)
            .with_bold(true)
            .with_color(Some(stroke))
            .with_baseline(TextBaseline::Middle);
        let label = Text::new(&label_style, self.caption()).render_to_svg(Point::new(32.0, 30.0));

        jersey(fill, &outline)
            .set(
                "transform",
                format!("translate({}, {}) scale({})", -half, -half, JERSEY_SIZE / ICON_BOX),
            )
            .add(label)
    }
}

impl Drawable for PlayerGlyph<'_> {
    fn render_to_layers(&self) -> LayeredOutput {
        let (fill, stroke) = Kit::for_player(self.player).colors();
        let position = self.player.position();

        let mut group = svg_element::Group::new()
            .set(
                "transform",
                format!("translate({}, {})", position.x(), position.y()),
            )
            .add(self.orientation_indicator(stroke))
            .add(self.shirt(fill, stroke));

        if self.player.has_ball() {
            let half = JERSEY_SIZE / 2.0;
            group = group.add(ball(Point::new(half - 1.0, -half + 1.0), BALL_SIZE));
        }

        let mut output = LayeredOutput::new();
        output.add_to_layer(RenderLayer::Player, Box::new(group));
        output
    }
}

#[cfg(test)]
mod tests {
    use tactiboard_core::draw::DEFAULT_FONT_FAMILY;

    use super::*;

    fn render(player: &Player) -> String {
        PlayerGlyph::new(player, DEFAULT_FONT_FAMILY)
            .render_to_layers()
            .render()
            .iter()
            .map(|node| node.to_string())
            .collect()
    }

    #[test]
    fn test_kit_selection() {
        let attacker = Player::new("p1", "PG", 20.0, 50.0).with_role(Role::Attacker).with_team(Team::Team1);
        assert_eq!(Kit::for_player(&attacker), Kit::Home);

        let defender = Player::new("p2", "DC", 20.0, 50.0).with_role(Role::Defender);
        assert_eq!(Kit::for_player(&defender), Kit::Away);

        let away = Player::new("p3", "AL", 20.0, 50.0).with_team(Team::Team2);
        assert_eq!(Kit::for_player(&away), Kit::Away);

        let keeper = Player::new("p4", "GB", 5.0, 50.0).with_team(Team::Team2);
        assert_eq!(Kit::for_player(&keeper), Kit::Goalkeeper);
    }

    #[test]
    fn test_player_glyph() {
        let player = Player::new("p1", "PG", 20.0, 50.0).with_orientation(90.0);
        let rendered = render(&player);
        assert!(rendered.contains("translate(20, 50)"));
        assert!(rendered.contains("rotate(90)"));
        assert!(rendered.contains("M 0 -6 L -1.5 -4 L 1.5 -4 Z"));
        assert!(rendered.contains("PG"));
        assert!(!rendered.contains("<circle"));
    }

    #[test]
    fn test_label_falls_back_to_id() {
        let player = Player::new("p7", "", 20.0, 50.0);
        assert_eq!(PlayerGlyph::new(&player, DEFAULT_FONT_FAMILY).caption(), "p7");
    }

    #[test]
    fn test_ball_drawn_when_carried() {
        let player = Player::new("p1", "PG", 20.0, 50.0).with_ball(true);
        let rendered = render(&player);
        assert!(rendered.contains("<circle"));
        assert!(rendered.contains("translate(0, -6)"));
    }
}
