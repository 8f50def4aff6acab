mod cli;

use std::sync::Arc;

use anyhow::{bail, Context};
use clap::Parser;

use bookshelf::api::{BooksApi, DraftField, HttpBooksApi};
use bookshelf::config::Config;
use bookshelf::telemetry::init_tracing;
use bookshelf::ui::book_create::BookCreateView;
use bookshelf::ui::book_list::BookListView;
use bookshelf::ui::counter::CounterView;
use bookshelf::ui::diagnostics::Diagnostics;
use bookshelf::ui::render::Page;

use crate::cli::{Cli, Command};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing();

    let config = Config::load_with(cli.api_url).context("Failed to load configuration")?;

    let diagnostics = Diagnostics::new();
    match cli.command {
        Command::Books => {
            let api: Arc<dyn BooksApi> = Arc::new(HttpBooksApi::new(&config.api)?);
            let mut view = BookListView::new(api, diagnostics);
            view.mount();
            view.next_event().await;
            print!("{}", view.render());
            view.unmount();
        }
        Command::Create { title, author } => {
            let api: Arc<dyn BooksApi> = Arc::new(HttpBooksApi::new(&config.api)?);
            let mut view = BookCreateView::new(api, diagnostics);
            view.mount();
            view.handle_change(DraftField::Title, title);
            view.handle_change(DraftField::Author, author);
            view.handle_submit();
            view.next_event().await;

            let page = view.render();
            view.unmount();
            match page {
                Page::Redirect(route) => println!("Created: {}", route),
                form => {
                    print!("{}", form);
                    bail!("Book was not created");
                }
            }
        }
        Command::Counter {
            increase,
            reset,
            sprinkles,
        } => {
            let mut view = CounterView::new(diagnostics);
            view.mount();
            for _ in 0..increase {
                view.increase_count();
            }
            if reset {
                view.reset_count();
            }
            for _ in 0..sprinkles {
                view.add_sprinkles();
            }
            view.commit();
            print!("{}", view.render());
            view.unmount();
        }
    }

    Ok(())
}
