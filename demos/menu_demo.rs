//! Menu Demo: a title, a framed menu, and a text box.
//!
//! Demonstrates:
//! - Colors and fonts registered on a scene
//! - `Text`, `HLine` and `MenuBox` built from points
//! - `SingleLineTextBox` capture after the menu choice
//! - Switching fields to show a second page
//!
//! Logs go to `termpoints.log` in the working directory.

use termpoints::shape::{Figure, HLine, Text};
use termpoints::terminal::Backend;
use termpoints::widget::{MenuBox, SingleLineTextBox};
use termpoints::{run, App, Attributes, Color, Flow, Font, FontId, Result, Scene, SessionConfig};

const MENU_FIELD: u32 = 0;
const RESULT_FIELD: u32 = 1;

#[derive(Default)]
struct Demo {
    title_font: Option<FontId>,
    figures: Vec<Box<dyn Figure>>,
}

impl App for Demo {
    fn setup(&mut self, scene: &mut Scene, _backend: &mut dyn Backend) -> Result<()> {
        let title = scene.add_color(Color::Cyan, Color::Default)?;
        self.title_font = Some(scene.add_font(Font::new(title).with_attributes(Attributes::BOLD))?);

        self.figures.push(Box::new(Text::new(2, 1, "termpoints demo", MENU_FIELD, self.title_font, scene)?));
        self.figures.push(Box::new(HLine::new(2..17, 2, '─', MENU_FIELD, None, scene)?));
        Ok(())
    }

    fn step(&mut self, scene: &mut Scene, backend: &mut dyn Backend) -> Result<Flow> {
        let mut menu = MenuBox::new(2, 4, ["Greet", "Count", "Quit"], MENU_FIELD, None, scene)?;
        let choice = menu.capture(scene, backend)?;
        menu.remove(scene)?;

        let message = match choice.as_str() {
            "Greet" => {
                let name = SingleLineTextBox::new(2, 4, "Name: ", MENU_FIELD, None)
                    .max_len(Some(20))
                    .capture(scene, backend)?;
                format!("Hello, {name}!")
            }
            "Count" => {
                let number = SingleLineTextBox::new(2, 4, "How many? ", MENU_FIELD, None)
                    .capture_number(scene, backend)?
                    .unwrap_or(0);
                "*".repeat(usize::try_from(number.min(40)).unwrap_or(0))
            }
            _ => {
                for figure in &mut self.figures {
                    figure.remove(scene)?;
                }
                return Ok(Flow::Stop);
            }
        };

        let mut page = Text::new(2, 4, format!("{message}\n\npress any key"), RESULT_FIELD, self.title_font, scene)?;
        scene.set_active_field(RESULT_FIELD);
        scene.redraw(backend)?;
        backend.read_key()?;
        page.remove(scene)?;
        scene.set_active_field(MENU_FIELD);
        Ok(Flow::Continue)
    }
}

fn main() -> Result<()> {
    let mut scene = Scene::new();
    let frames = run(&mut Demo::default(), &mut scene, SessionConfig::default())?;
    println!("drew {frames} frames");
    Ok(())
}
