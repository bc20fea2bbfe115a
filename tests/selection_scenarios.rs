//! End-to-end selection behavior through the public API.

use picklist::{
    handle_event, initialize, same_content, Action, Config, ContentHandle, Event, Key, List,
    ListStyles, Size, StyleVariant, TextContent,
};
use std::cell::Cell;
use std::rc::Rc;

fn rows(count: usize) -> Vec<ContentHandle> {
    (0..count)
        .map(|i| TextContent::handle(format!("row {i}"), Size::new(80.0, 16.0)))
        .collect()
}

fn filled(config: &Config, items: &[ContentHandle]) -> List {
    let mut list = initialize(config);
    for item in items {
        list.add(Rc::clone(item));
    }
    list
}

fn watch(list: &mut List) -> Rc<Cell<usize>> {
    let hits = Rc::new(Cell::new(0));
    let observer = Rc::clone(&hits);
    list.subscribe(move || observer.set(observer.get() + 1));
    hits
}

fn variants(list: &List) -> Vec<StyleVariant> {
    list.items().map(|item| item.applied_style().variant).collect()
}

#[test]
fn stepping_through_a_single_selection_list() {
    let mut list = filled(&Config::default(), &rows(3));
    let hits = watch(&mut list);

    list.move_next(true, true);
    assert_eq!(list.first_selected_index(), Some(0));
    assert_eq!(hits.get(), 1);

    list.move_next(true, true);
    assert!(!list.get(0).unwrap().is_selected());
    assert_eq!(list.first_selected_index(), Some(1));
    assert_eq!(hits.get(), 2);

    list.move_next(true, true);
    assert_eq!(hits.get(), 3);

    // Already on the last item.
    let before = variants(&list);
    assert_eq!(list.move_next(true, true), Some(2));
    assert_eq!(list.first_selected_index(), Some(2));
    assert_eq!(variants(&list), before);
    assert_eq!(hits.get(), 3);
}

#[test]
fn toggling_in_a_multi_selection_list() {
    let config = Config {
        single_selection: false,
        ..Default::default()
    };
    let mut list = filled(&config, &rows(2));
    let hits = watch(&mut list);

    handle_event(&mut list, &Event::KeyDown(Key::Space));
    assert!(list.selected_items().is_empty());
    assert_eq!(hits.get(), 0);

    handle_event(&mut list, &Event::KeyDown(Key::Down));
    assert_eq!(list.first_highlighted_index(), Some(0));

    handle_event(&mut list, &Event::KeyDown(Key::Space));
    let item = list.get(0).unwrap();
    assert!(item.is_selected());
    assert!(item.is_highlighted());
    assert_eq!(item.applied_style().variant, StyleVariant::SelectedAndHighlighted);
    assert_eq!(hits.get(), 1);
}

#[test]
fn hovering_and_accepting_in_a_dropdown() {
    let config = Config {
        dropdown: true,
        ..Default::default()
    };
    let mut list = filled(&config, &rows(3));
    let hits = watch(&mut list);

    handle_event(&mut list, &Event::CursorEnter(2));
    assert_eq!(list.first_selected_index(), Some(2));
    assert_eq!(hits.get(), 0);

    let actions = handle_event(&mut list, &Event::KeyDown(Key::Enter));
    assert_eq!(actions, vec![Action::StopPropagation, Action::Hide]);
    assert!(!list.is_visible());
}

#[test]
fn single_selection_holds_across_mixed_input() {
    let items = rows(5);
    let mut list = filled(&Config::default(), &items);

    let steps: Vec<Box<dyn Fn(&mut List)>> = vec![
        Box::new(|l: &mut List| handle_event(l, &Event::ItemMouseDown(3)).clear()),
        Box::new(|l: &mut List| l.apply_selection(1, true, true, true)),
        Box::new(|l: &mut List| l.select_pos(4, true)),
        Box::new(|l: &mut List| {
            l.move_previous(true, true);
        }),
        Box::new(|l: &mut List| l.apply_selection(0, true, false, false)),
        Box::new(|l: &mut List| l.apply_selection(0, false, true, true)),
        Box::new(|l: &mut List| handle_event(l, &Event::KeyRepeat(Key::Down)).clear()),
    ];

    for step in &steps {
        step(&mut list);
        assert!(list.selected_items().len() <= 1);
    }
}

#[test]
fn boundaries_do_not_notify() {
    let mut list = filled(&Config::default(), &rows(3));
    list.select_pos(0, true);
    let hits = watch(&mut list);

    assert_eq!(list.move_previous(true, true), Some(0));
    assert_eq!(hits.get(), 0);

    list.select_pos(2, true);
    assert_eq!(hits.get(), 1);
    assert_eq!(list.move_next(true, true), Some(2));
    assert_eq!(hits.get(), 1);
}

#[test]
fn positions_follow_insertions_and_removals() {
    let items = rows(4);
    let mut list = filled(&Config::default(), &items);
    let extra = TextContent::handle("inserted", Size::new(80.0, 16.0));

    list.insert_at(2, Rc::clone(&extra));
    assert_eq!(list.item_position(&items[0]), Some(0));
    assert_eq!(list.item_position(&items[1]), Some(1));
    assert_eq!(list.item_position(&extra), Some(2));
    assert_eq!(list.item_position(&items[2]), Some(3));
    assert_eq!(list.item_position(&items[3]), Some(4));

    list.remove(&items[1]);
    assert_eq!(list.item_position(&items[1]), None);
    assert_eq!(list.item_position(&extra), Some(1));
    assert!(same_content(&list.item_at(3).unwrap(), &items[3]));
}

#[test]
fn selecting_an_already_selected_item_is_silent() {
    let items = rows(2);
    let mut list = filled(&Config::default(), &items);
    list.set_selected(&items[0], true);
    let hits = watch(&mut list);

    list.set_selected(&items[0], true);
    list.select_pos(0, true);
    list.set_selected(&items[1], false);

    assert_eq!(hits.get(), 0);
    assert_eq!(list.first_selected_index(), Some(0));
}

#[test]
fn every_flag_combination_has_its_own_style() {
    let styles = Rc::new(ListStyles::default());
    let mut list = List::vertical(200.0, Rc::clone(&styles));
    for item in rows(2) {
        list.add(item);
    }
    list.set_single_selection_mode(false);

    // Item 0: highlighted, then selected and highlighted. Item 1: selected only.
    list.move_next(false, true);
    assert_eq!(variants(&list), [StyleVariant::Highlighted, StyleVariant::Normal]);

    list.select_pos(1, true);
    assert_eq!(variants(&list), [StyleVariant::Highlighted, StyleVariant::Selected]);

    list.select_pos(0, true);
    assert_eq!(
        variants(&list),
        [StyleVariant::SelectedAndHighlighted, StyleVariant::Selected]
    );

    let applied = list.get(1).unwrap().applied_style();
    assert_eq!(applied.bg_color, styles.item.selected.bg_color);
    assert_eq!(applied.fg_color, styles.item.selected.fg_color);
}

#[test]
fn keyboard_navigation_keeps_the_selection_in_view() {
    let config = Config {
        viewport_extent: 48.0,
        ..Default::default()
    };
    let mut list = filled(&config, &rows(10));

    for expected in 0..10 {
        handle_event(&mut list, &Event::KeyDown(Key::Down));
        assert_eq!(list.first_selected_index(), Some(expected));
        assert!(list.item_visible(expected), "item {expected} scrolled out of view");
    }

    for expected in (0..9).rev() {
        handle_event(&mut list, &Event::KeyDown(Key::Up));
        assert!(list.item_visible(expected), "item {expected} scrolled out of view");
    }
}
