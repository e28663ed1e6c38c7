use std::fs::File;
use std::io::{self, stdout, Write};

use crossterm::event::{self, Event as TermEvent, KeyCode, KeyEventKind};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode, Clear, ClearType};
use crossterm::{cursor, execute};
use simplelog::{Config, LevelFilter, WriteLogger};
use uplift::Tabs;
use webdom::{find_element, Element, FocusState, Key, Modifiers};

fn main() -> io::Result<()> {
    if let Ok(file) = File::create("uplift-demo.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, Config::default(), file);
    }

    let mut root = document();
    let mut tabs = Tabs::new("tab-menu");
    tabs.init(&mut root);

    let mut focus = FocusState::new();

    enable_raw_mode()?;
    let result = run(&mut root, &mut tabs, &mut focus);
    disable_raw_mode()?;
    result
}

fn run(root: &mut Element, tabs: &mut Tabs, focus: &mut FocusState) -> io::Result<()> {
    draw(root, tabs, focus)?;

    loop {
        if let TermEvent::Key(key_event) = event::read()? {
            if key_event.kind != KeyEventKind::Press {
                continue;
            }
            if key_event.code == KeyCode::Char('q') {
                return Ok(());
            }

            let key: Key = key_event.code.into();
            let modifiers: Modifiers = key_event.modifiers.into();
            let events = focus.process_key(key, modifiers, root);
            tabs.process_events(&events, root, focus);

            draw(root, tabs, focus)?;
        }
    }
}

fn draw(root: &Element, tabs: &Tabs, focus: &FocusState) -> io::Result<()> {
    let mut out = stdout();
    execute!(out, Clear(ClearType::All), cursor::MoveTo(0, 0))?;

    let mut bar = String::new();
    for item in tabs.items() {
        let Some(tab) = find_element(root, &item.tab) else {
            continue;
        };
        let selected = tab.get_attr("aria-selected") == Some("true");
        let focused = focus.focused() == Some(item.tab.as_str());

        bar.push(if selected { '[' } else { ' ' });
        bar.push_str(&tab.text_content());
        if focused {
            bar.push('*');
        }
        bar.push(if selected { ']' } else { ' ' });
        bar.push(' ');
    }
    write!(out, "{bar}\r\n\r\n")?;

    for item in tabs.items() {
        let Some(panel) = find_element(root, &item.panel) else {
            continue;
        };
        if !panel.hidden {
            let marker = if focus.focused() == Some(item.panel.as_str()) {
                " (focused)"
            } else {
                ""
            };
            write!(out, "{}{marker}\r\n", panel.text_content())?;
        }
    }

    write!(
        out,
        "\r\nTab focuses the tab strip, Left/Right switch, Down enters the panel, q quits.\r\n"
    )?;
    out.flush()
}

fn document() -> Element {
    Element::new("body").children([
        Element::list().id("tab-menu").children([
            Element::list_item().child(Element::anchor("#overview").text("Overview")),
            Element::list_item().child(Element::anchor("#details").text("Details")),
            Element::list_item().child(Element::anchor("#notes").text("Notes")),
        ]),
        Element::section()
            .id("overview")
            .child(Element::paragraph("A short overview of the thing itself.")),
        Element::section()
            .id("details")
            .child(Element::paragraph("All the details nobody reads.")),
        Element::section()
            .id("notes")
            .child(Element::paragraph("Assorted notes and caveats.")),
    ])
}
