use maudit::{BuildOptions, BuildOutput};
use personal_blog::{components::footer, config::site_config};

fn main() -> Result<BuildOutput, Box<dyn std::error::Error>> {
    let config = site_config();

    minimal_blog::build(
        config.site_metadata,
        &config.plugins,
        Some(footer),
        BuildOptions::default(),
    )
}
