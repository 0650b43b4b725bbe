use std::str::FromStr;
use structopt::StructOpt;
use display_font::{Color, Font, FrameBuffer, LARGE_FONT, SMALL_FONT};

/// Size of the simulated display.
const WIDTH: u16 = 480;
const HEIGHT: u16 = 128;

enum FontChoice {
    Large,
    Small,
}

impl FromStr for FontChoice {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, String> {
        match s {
            "large" => Ok(FontChoice::Large),
            "small" => Ok(FontChoice::Small),
            _ => Err(format!("unknown font {:?}, use large or small", s)),
        }
    }
}

fn parse_color(s: &str) -> Result<Color, String> {
    let s = s.trim_start_matches('#');
    if s.len() != 6 {
        return Err(format!("color {:?} is not of the form RRGGBB", s));
    }
    let v = u32::from_str_radix(s, 16).map_err(|e| e.to_string())?;
    Ok(Color::rgb((v >> 16) as u8, (v >> 8) as u8, v as u8))
}

#[derive(StructOpt)]
#[structopt(about = "Font engine simulator.")]
pub struct Options {
    #[structopt(short="x", help="Scale display up by a factor of 2")]
    scale_x2: bool,
    #[structopt(short="f", long="font", default_value="large", help="Font to draw with (large or small)")]
    font: FontChoice,
    #[structopt(long="fg", default_value="000000", parse(try_from_str=parse_color),
                help="Text color as RRGGBB")]
    fg: Color,
    #[structopt(long="bg", default_value="ffffff", parse(try_from_str=parse_color),
                help="Background color as RRGGBB")]
    bg: Color,
    #[structopt(help="Text to draw")]
    text: String,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Options::from_args();

    let font: &Font = match args.font {
        FontChoice::Large => &LARGE_FONT,
        FontChoice::Small => &SMALL_FONT,
    };
    if !font.can_be_written(&args.text) {
        log::warn!("some characters have no glyph and are drawn as U+FFFD");
    }
    let (w, h) = font.string_size(&args.text);
    log::info!("text needs {}x{} pixels", w, h);

    // draw the text centered on the display
    let mut fb_mem = vec![args.bg; (WIDTH as usize) * (HEIGHT as usize)];
    let mut fb = FrameBuffer::new(&mut fb_mem, WIDTH, HEIGHT);
    fb.clear(args.bg);
    let px = WIDTH.saturating_sub(w) / 2;
    let py = HEIGHT.saturating_sub(h) / 2;
    fb.text(font, px, py, &args.text, args.fg, args.bg).expect("could not draw text");

    // convert RGB565 to what the window wants (this is done in hardware on the device)
    let fb_32bit = fb.buf().iter().map(|c| c.to_rgb888()).collect::<Vec<_>>();

    // open the window
    let mut win = minifb::Window::new("Display", WIDTH as usize, HEIGHT as usize, minifb::WindowOptions {
        scale: if args.scale_x2 { minifb::Scale::X2 } else { minifb::Scale::X1 },
        .. Default::default()
    }).expect("could not create window");
    win.update_with_buffer(&fb_32bit, WIDTH as usize, HEIGHT as usize).expect("could not update window");

    loop {
        // process quit conditions
        if !win.is_open() {
            log::info!("window closed, exiting");
            return;
        }
        if win.is_key_down(minifb::Key::Escape) {
            return;
        }
        win.update();
        // aim for a framerate of 50Hz
        std::thread::sleep(std::time::Duration::from_millis(20));
    }
}
