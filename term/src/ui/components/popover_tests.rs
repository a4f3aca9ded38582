use super::*;

#[test]
fn test_get_popover_area_is_centered() {
    let area = Rect::new(0, 0, 100, 50);

    let popover = get_popover_area(area, 50, 40, MIN_POPOVER_SIZE);

    assert_eq!(popover, Rect::new(25, 15, 50, 20));
}

#[test]
fn test_get_popover_area_grows_to_minimum() {
    let area = Rect::new(0, 0, 40, 12);

    let popover = get_popover_area(area, 50, 40, MIN_POPOVER_SIZE);

    assert_eq!(popover.width, MIN_POPOVER_SIZE.width);
    assert_eq!(popover.height, MIN_POPOVER_SIZE.height);
    assert_eq!(popover.x, 3);
}

#[test]
fn test_get_popover_area_never_exceeds_parent() {
    let area = Rect::new(0, 0, 20, 5);

    let popover = get_popover_area(area, 50, 40, MIN_POPOVER_SIZE);

    assert_eq!(popover, area);
}
