/// Height of the simulated browser window, in pixels.
pub const VIEWPORT_HEIGHT: f64 = 800.0;
/// Distance moved by `down` / `up`.
pub const SCROLL_STEP: f64 = 400.0;

pub const HERO_HEIGHT: f64 = 600.0;
/// The score summary band at the top of the results. It fills the window, so
/// scrolling to the results brings no later section into view.
pub const RESULTS_HEADER_HEIGHT: f64 = VIEWPORT_HEIGHT;
pub const SECTION_MIN_HEIGHT: f64 = 240.0;
/// Extra height per rendered card, tag or row inside a section.
pub const ITEM_HEIGHT: f64 = 40.0;

pub const PROMPT: &str = "> ";

pub const HELP: &str = "\
Commands:
  select <path>     stage a resume (.pdf, .docx, .txt)
  drop <path>       stage a resume as if dropped onto the page
  browse            open the file picker
  remove            unstage the current file
  analyze           send the staged file to the backend
  role <n>          open the suitability chart for role card n
  learn <n>         open learning resources for missing skill n
  free | paid       open free or paid resources from the learning dialog
  close             close dialogs
  backdrop          click outside the open dialog
  nav <n|#id>       jump to a side-nav entry
  down | up | top   scroll the page
  toggle roles|text expand or collapse a detail block
  export            save the dashboard as HTML
  show              print the dashboard again
  help              this text
  quit              exit";
