use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use folio_intl::config::{self, paths};
use folio_intl::diagnostics::DiagnosticsLog;
use folio_intl::error::{Error, Result};
use folio_intl::i18n::CatalogStore;
use folio_intl::locale::{detect_locale, Locale, DEFAULT_LOCALE, SUPPORTED_LOCALES};
use folio_intl::render;
use folio_intl::route::{RecordingNavigator, Route};
use folio_intl::store::StoreBuilder;
use folio_intl::theme::ThemeMode;

const HELP: &str = "\
folio_intl - bilingual portfolio content engine

USAGE:
  folio_intl [OPTIONS] [ROUTE]

ARGS:
  <ROUTE>  Route to render, e.g. /vi/home or /en/contact

OPTIONS:
  --lang <TAG>        Preferred language (vi, en), used when ROUTE is omitted
  --theme <MODE>      Theme mode: light, dark or system
  --switch <TAG>      After rendering, switch languages and render again
  --config-dir <DIR>  Read and write settings under DIR
  --i18n-dir <DIR>    Load message catalogs from DIR instead of the embedded ones
  -h, --help          Print help
  --version           Print version
";

struct Args {
    lang: Option<String>,
    theme: Option<ThemeMode>,
    switch: Option<Locale>,
    config_dir: Option<String>,
    i18n_dir: Option<PathBuf>,
    route: Option<String>,
}

fn parse_args() -> std::result::Result<Args, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        std::process::exit(0);
    }
    if args.contains("--version") {
        println!("folio_intl {}", env!("CARGO_PKG_VERSION"));
        std::process::exit(0);
    }

    Ok(Args {
        lang: args.opt_value_from_str("--lang")?,
        theme: args.opt_value_from_str("--theme")?,
        switch: args.opt_value_from_str("--switch")?,
        config_dir: args.opt_value_from_str("--config-dir")?,
        i18n_dir: args.opt_value_from_str("--i18n-dir")?,
        route: args
            .finish()
            .into_iter()
            .next()
            .and_then(|s| s.into_string().ok()),
    })
}

async fn show(catalogs: &CatalogStore, path: &str) -> Result<()> {
    match Route::parse(path) {
        Some(route) => {
            let catalog = catalogs.load(route.locale).await?;
            print!("{}", render::render_page(&catalog, route));
        }
        None => print!("{}", render::not_found(path)),
    }
    Ok(())
}

/// Describes a failure through whichever catalog still loads, falling back
/// to the plain error text when none does.
async fn describe_failure(catalogs: &CatalogStore, err: &Error) -> String {
    if let Error::Catalog(catalog_err) = err {
        for locale in SUPPORTED_LOCALES {
            if let Ok(catalog) = catalogs.load(*locale).await {
                return catalog.section("").tr_with(
                    catalog_err.i18n_key(),
                    &[("locale", catalog_err.locale().as_str())],
                );
            }
        }
    }
    err.to_string()
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = match parse_args() {
        Ok(args) => args,
        Err(err) => {
            eprintln!("error: {err}");
            eprint!("{HELP}");
            return ExitCode::from(2);
        }
    };

    paths::init_cli_overrides(args.config_dir.clone());
    let (loaded_config, config_warning) = config::load();

    let diagnostics = DiagnosticsLog::new(loaded_config.diagnostics.capacity());
    let catalogs = match &args.i18n_dir {
        Some(dir) => CatalogStore::with_dir(dir.clone(), diagnostics.clone()),
        None => CatalogStore::new(diagnostics.clone()),
    };

    // An explicit route wins; otherwise run the language detection chain
    // and start on that language's home page.
    let initial_path = match &args.route {
        Some(route) => route.clone(),
        None => {
            let locale = detect_locale(
                args.lang.as_deref(),
                loaded_config.general.language.as_deref(),
                SUPPORTED_LOCALES,
            )
            .unwrap_or(DEFAULT_LOCALE);
            format!("/{locale}/home")
        }
    };

    let navigator = Arc::new(RecordingNavigator::new());
    let mut builder = StoreBuilder::new(initial_path, navigator.clone())
        .with_config(loaded_config)
        .with_diagnostics(diagnostics.clone());
    if let Some(dir) = paths::get_app_config_dir() {
        builder = builder.with_config_dir(dir);
    }
    let store = builder.build();
    if let Some(mode) = args.theme {
        store.set_theme(mode);
    }

    if let Some(key) = &config_warning {
        match catalogs.load(store.locale()).await {
            Ok(catalog) => eprintln!("{}", catalog.section("").tr(key)),
            Err(_) => eprintln!("warning: {key}"),
        }
    }

    if let Err(err) = show(&catalogs, &store.current_path()).await {
        eprintln!("{}", describe_failure(&catalogs, &err).await);
        return ExitCode::FAILURE;
    }

    if let Some(target) = args.switch {
        let outcome = store.switch_language(target);
        if outcome.is_noop() {
            println!("(already showing {})", target.display_name());
        } else {
            // The host round trip: navigation lands, the new path is fed
            // back, and the settle window runs out.
            if let Some(path) = navigator.last() {
                store.path_changed(&path);
            }
            outcome.settle().await;
            println!();
            if let Err(err) = show(&catalogs, &store.current_path()).await {
                eprintln!("{}", describe_failure(&catalogs, &err).await);
                return ExitCode::FAILURE;
            }
        }
    }

    ExitCode::SUCCESS
}
