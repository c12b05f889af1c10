#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    MainMenu,
    Play,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MenuItem {
    #[default]
    Play,
    HowToPlay,
}

#[derive(Debug, Default)]
pub struct App {
    screen: Screen,
    pub menu_item: MenuItem,
    pub help_open: bool,
    pub shop_open: bool,
    pub selected_shop_item: usize,
}

impl App {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn start_playing(&mut self) {
        self.screen = Screen::Play;
        self.help_open = false;
    }

    pub fn return_to_menu(&mut self) {
        self.screen = Screen::MainMenu;
        self.shop_open = false;
    }

    pub fn next_menu_item(&mut self) {
        self.menu_item = match self.menu_item {
            MenuItem::Play => MenuItem::HowToPlay,
            MenuItem::HowToPlay => MenuItem::Play,
        };
    }

    pub fn toggle_help(&mut self) {
        self.help_open = !self.help_open;
    }

    pub fn toggle_shop(&mut self) {
        self.shop_open = !self.shop_open;
        if self.shop_open {
            self.selected_shop_item = 0;
        }
    }

    pub fn select_previous_shop_item(&mut self) {
        self.selected_shop_item = self.selected_shop_item.saturating_sub(1);
    }

    pub fn select_next_shop_item(&mut self, len: usize) {
        if self.selected_shop_item + 1 < len {
            self.selected_shop_item += 1;
        }
    }
}
