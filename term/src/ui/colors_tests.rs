use super::*;

#[test]
fn test_theme_from_string() {
    assert_eq!(Theme::from_string("Blue"), Theme::Blue);
    assert_eq!(Theme::from_string("Emerald"), Theme::Emerald);
    assert_eq!(Theme::from_string("indigo"), Theme::Indigo);
    assert_eq!(Theme::from_string(" Red "), Theme::Red);
    assert_eq!(Theme::from_string("nope"), Theme::Blue);
}

#[test]
fn test_theme_display_round_trip() {
    for theme in Theme::iter() {
        assert_eq!(Theme::from_string(&theme.to_string()), theme);
    }
}

#[test]
fn test_theme_next_wraps() {
    assert_eq!(Theme::Blue.next(), Theme::Emerald);
    assert_eq!(Theme::Emerald.next(), Theme::Indigo);
    assert_eq!(Theme::Indigo.next(), Theme::Red);
    assert_eq!(Theme::Red.next(), Theme::Blue);
}

#[test]
fn test_true_color_palette() {
    let colors = Colors::from_theme(Theme::Emerald, true);
    assert_eq!(colors.border_color, tailwind::EMERALD.c400);
    assert_eq!(colors.buffer_bg, tailwind::SLATE.c950);
}

#[test]
fn test_basic_palette() {
    let colors = Colors::from_theme(Theme::Red, false);
    assert_eq!(colors.border_color, Color::LightRed);
    assert_eq!(colors.row_header_bg, Color::Red);
    assert_eq!(colors.buffer_bg, Color::Black);
}
