//! End-to-end frames: engine → presenter → registry → bridge → props → mailbox.

use std::rc::Rc;

use client_frontend_core::{
    BridgedPresenter, InMemorySaveStore, Mailboxes, MapViewProps, SaveStore, ScreenAction,
    ViewBridge, ViewComponent, ViewRegistry, views,
};
use game_core::{
    EngineError, GameConfig, GameEngine, GameMapAction, MenuAction, PresenterError, RunState,
    TickOutcome,
};

const SAVE_KEY: &str = "TCG Game";

struct Harness {
    bridge: Rc<ViewBridge>,
    store: InMemorySaveStore,
    presenter: BridgedPresenter,
    engine: GameEngine,
}

impl Harness {
    fn new() -> Self {
        let bridge = Rc::new(ViewBridge::new());
        let mut registry = ViewRegistry::new(Rc::clone(&bridge));
        views::register_all(&mut registry, &Mailboxes::new());

        let store = InMemorySaveStore::new();
        let presenter = BridgedPresenter::new(registry, store.clone(), SAVE_KEY);

        Self {
            bridge,
            store,
            presenter,
            engine: GameEngine::new(GameConfig::with_seed(42)),
        }
    }

    fn tick(&mut self) -> TickOutcome {
        self.engine.tick(&mut self.presenter).unwrap()
    }

    /// Plays the role of the UI: posts through the callable on screen.
    fn press(&self, action: ScreenAction) {
        let consume = views::consume_action(&self.bridge.current().props)
            .expect("view exposes consume_action");
        consume.call(action);
    }

    fn menu(&self, action: MenuAction) {
        self.press(ScreenAction::Menu(action));
    }

    fn component(&self) -> ViewComponent {
        self.bridge.current().component
    }
}

#[test]
fn new_game_reaches_the_map_and_moves_along_an_edge() {
    let mut h = Harness::new();

    h.tick();
    h.tick();
    assert_eq!(h.component(), ViewComponent::MainMenu);

    h.menu(MenuAction::Confirm);
    h.tick();
    assert_eq!(*h.engine.state(), RunState::StartingNewGame);

    h.tick();
    h.tick();
    assert_eq!(h.component(), ViewComponent::GameMap);

    let map = MapViewProps::from_props(&h.bridge.current().props).unwrap();
    assert_eq!(map.current, 0);
    let target = map.reachable()[0];

    h.press(ScreenAction::Map(GameMapAction::GoToNode(target)));
    h.tick();
    h.tick();

    let map = MapViewProps::from_props(&h.bridge.current().props).unwrap();
    assert_eq!(map.current, target);
    assert_eq!(map.visited, vec![0]);
}

#[test]
fn idle_frames_keep_the_same_view() {
    let mut h = Harness::new();
    h.tick();
    h.tick();

    let shown = h.bridge.current();
    let generation = h.bridge.generation();
    for _ in 0..10 {
        h.tick();
    }

    assert!(Rc::ptr_eq(&shown, &h.bridge.current()));
    assert_eq!(h.bridge.generation(), generation);
}

#[test]
fn only_the_latest_action_per_frame_is_applied() {
    let mut h = Harness::new();
    h.tick();
    h.tick();

    h.menu(MenuAction::Confirm);
    h.menu(MenuAction::Next);
    h.tick();

    assert!(matches!(h.engine.state(), RunState::ShowingMainMenu(_)));
}

#[test]
fn action_for_a_replaced_screen_is_discarded() {
    let mut h = Harness::new();
    h.tick();
    h.tick();

    // Next moves the cursor, so the following frame shows new props.
    h.menu(MenuAction::Next);
    h.tick();
    h.menu(MenuAction::Confirm);
    // The stale Confirm was queued against the previous props and is dropped
    // when the menu re-renders with the moved cursor.
    h.tick();

    assert!(matches!(h.engine.state(), RunState::ShowingMainMenu(_)));
    assert_eq!(h.component(), ViewComponent::MainMenu);
}

#[test]
fn save_and_quit_then_continue() {
    let mut h = Harness::new();
    h.tick();
    h.tick();
    h.menu(MenuAction::Confirm);
    for _ in 0..3 {
        h.tick();
    }
    assert_eq!(h.component(), ViewComponent::GameMap);

    h.press(ScreenAction::Map(GameMapAction::PauseGame));
    h.tick();
    h.tick();
    assert_eq!(h.component(), ViewComponent::PauseMenu);

    h.menu(MenuAction::Next);
    h.tick();
    h.tick();
    h.menu(MenuAction::Confirm);
    h.tick();

    assert_eq!(*h.engine.state(), RunState::Initializing);
    assert!(h.store.read(SAVE_KEY).unwrap().is_some());

    h.tick();
    assert!(h.engine.has_save_game());
    h.tick();
    h.menu(MenuAction::Next);
    h.tick();
    h.tick();
    h.menu(MenuAction::Confirm);
    h.tick();
    assert_eq!(*h.engine.state(), RunState::LoadingSavedGame);

    h.tick();
    assert!(matches!(h.engine.state(), RunState::PlayingGame(_)));
}

#[test]
fn quitting_closes_the_view() {
    let mut h = Harness::new();
    h.tick();
    h.tick();

    for _ in 0..2 {
        h.menu(MenuAction::Next);
        h.tick();
        h.tick();
    }
    h.menu(MenuAction::Confirm);

    assert_eq!(h.tick(), TickOutcome::Quit);
    assert_eq!(h.component(), ViewComponent::Null);
    assert_eq!(h.tick(), TickOutcome::Quit);
}

#[test]
fn unbound_screen_fails_the_tick() {
    let bridge = Rc::new(ViewBridge::new());
    let registry = ViewRegistry::new(bridge);
    let mut presenter = BridgedPresenter::new(registry, InMemorySaveStore::new(), SAVE_KEY);
    let mut engine = GameEngine::new(GameConfig::new());

    engine.tick(&mut presenter).unwrap();
    let err = engine.tick(&mut presenter).unwrap_err();

    assert!(matches!(
        err,
        EngineError::Presenter(PresenterError::NotBound("render_main_menu"))
    ));
}
