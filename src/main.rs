use clap::Parser;
use miette::Result;

use inventory::cli::logger::init_logger;
use inventory::cli::{Cli, Console, Styler};
use inventory::core::{Config, CreatePartSpecification};
use inventory::entities::{
    PartRequisitionRequestRepository, PartSpecificationRepository, SupplierRepository,
};

fn main() -> Result<()> {
    // Reset SIGPIPE to default behavior (terminate silently) for proper Unix piping.
    #[cfg(unix)]
    {
        unsafe {
            libc::signal(libc::SIGPIPE, libc::SIG_DFL);
        }
    }
    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .unicode(true)
                .context_lines(2)
                .tab_width(4)
                .build(),
        )
    }))?;

    let cli = Cli::parse();
    let global = cli.global;
    init_logger(global.verbose, global.quiet);

    let config = Config::load(global.config.as_deref())?;
    tracing::debug!(?config, "configuration loaded");

    let color = !global.no_color && config.color() && console::colors_enabled();

    let use_case = CreatePartSpecification::new(
        PartSpecificationRepository::new(),
        SupplierRepository::new(),
        PartRequisitionRequestRepository::new(),
    );

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut console = Console::new(
        use_case,
        stdin.lock(),
        stdout.lock(),
        Styler::new(color),
        config,
    );
    console.run()?;
    Ok(())
}
