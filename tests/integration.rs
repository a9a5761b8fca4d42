// SPDX-License-Identifier: MPL-2.0
use std::time::Duration;
use tempfile::tempdir;
use toastbox::config::{self, BannerConfig, Config, GeneralConfig};
use toastbox::i18n::fluent::I18n;
use toastbox::notify::{timer, BannerEntry, Motion, Phase, ScreenSize, SlideBanner, Step};

#[test]
fn test_language_change_via_config() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let config_path = dir.path().join("settings.toml");

    let english = Config {
        general: GeneralConfig {
            language: Some("en-US".to_string()),
            ..GeneralConfig::default()
        },
        ..Config::default()
    };
    config::save_to_path(&english, &config_path).expect("Failed to write english config");
    let loaded = config::load_from_path(&config_path).expect("Failed to load english config");
    let i18n_en = I18n::new(None, None, &loaded);
    assert_eq!(i18n_en.current_locale().to_string(), "en-US");
    assert_eq!(i18n_en.tr("dialog-title"), "Notification");

    let french = Config {
        general: GeneralConfig {
            language: Some("fr".to_string()),
            ..GeneralConfig::default()
        },
        ..Config::default()
    };
    config::save_to_path(&french, &config_path).expect("Failed to write french config");
    let loaded = config::load_from_path(&config_path).expect("Failed to load french config");
    let i18n_fr = I18n::new(None, None, &loaded);
    assert_eq!(i18n_fr.current_locale().to_string(), "fr");

    // CLI wins over the settings file
    let i18n_cli = I18n::new(Some("en-US".to_string()), None, &loaded);
    assert_eq!(i18n_cli.current_locale().to_string(), "en-US");

    dir.close().expect("Failed to close temporary directory");
}

#[test]
fn test_config_dir_override_feeds_banner_motion() {
    let dir = tempdir().expect("Failed to create temporary directory");
    std::fs::write(
        dir.path().join("settings.toml"),
        "[banner]\nstep_px = 0\ntick_ms = 20\ndwell_ms = 1500\n",
    )
    .expect("Failed to write settings");

    let (config, warning) = config::load_with_override(Some(dir.path().to_path_buf()));
    assert!(warning.is_none());

    let motion = Motion::from(&config.banner);
    assert_eq!(motion.step, 1);
    assert_eq!(motion.tick, Duration::from_millis(20));
    assert_eq!(motion.dwell, Duration::from_millis(1500));
    assert_eq!(config.banner.width, BannerConfig::default().width);
}

#[test]
fn test_banner_timeline_on_small_screen() {
    let motion = Motion::default();
    let mut banner = SlideBanner::new(800, 280, &motion);
    assert_eq!(banner.final_x(), 500);

    let mut positions = Vec::new();
    loop {
        match banner.tick() {
            Step::Moved(x) => positions.push(x),
            Step::Arrived(x) => {
                positions.push(x);
                break;
            }
            other => panic!("unexpected step while sliding in: {:?}", other),
        }
    }
    assert_eq!(positions.len(), 38);
    assert_eq!(positions.last(), Some(&500));
    assert!(positions.windows(2).all(|pair| pair[1] < pair[0]));

    assert!(banner.finish_dwell());
    let mut out_ticks = 0;
    while banner.tick() != Step::Departed {
        out_ticks += 1;
    }
    assert_eq!(banner.phase(), Phase::Closed);
    assert_eq!(out_ticks, 37);
    assert_eq!(banner.tick(), Step::Idle);
}

#[tokio::test(start_paused = true)]
async fn test_dwell_timer_fires_after_configured_duration() {
    let config = Config {
        banner: BannerConfig {
            dwell_ms: 1500,
            ..BannerConfig::default()
        },
        ..Config::default()
    };
    let motion = Motion::from(&config.banner);

    let early =
        tokio::time::timeout(motion.dwell - motion.tick, timer::elapsed(motion.dwell)).await;
    assert!(early.is_err());

    let start = tokio::time::Instant::now();
    timer::elapsed(motion.dwell).await;
    assert_eq!(start.elapsed(), Duration::from_millis(1500));
}

#[test]
fn test_closing_a_dwelling_banner_aborts_its_timer() {
    let motion = Motion::default();
    let mut entry = BannerEntry::new(SlideBanner::new(800, 280, &motion));
    while entry.banner.phase() == Phase::SlidingIn {
        entry.banner.tick();
    }
    let (_timer, handle) = timer::one_shot(motion.dwell, ()).abortable();
    entry.arm_dwell(handle);

    assert!(entry.banner.close());
    let handle = entry.disarm_dwell().expect("dwell timer was armed");

    assert!(handle.is_aborted());
    assert!(!entry.banner.finish_dwell());
    assert_eq!(entry.banner.tick(), Step::Idle);
}

#[test]
fn test_oversized_screen_config_completes_banner_cycle() {
    let config: Config =
        toml::from_str("[screen]\nfallback_width = 4294967295\n").expect("valid toml");
    let config = config.sanitized();
    let screen = ScreenSize::from(&config.screen);
    assert_eq!(screen.width, 16_384);

    let motion = Motion::from(&config.banner);
    let mut banner = SlideBanner::new(screen.width, 280, &motion);
    while !matches!(banner.tick(), Step::Arrived(_)) {}
    assert!(banner.finish_dwell());
    while banner.tick() != Step::Departed {}

    assert_eq!(banner.phase(), Phase::Closed);
}

#[test]
fn test_banner_at_the_coordinate_limit_does_not_overflow() {
    let motion = Motion {
        step: 200,
        ..Motion::default()
    };
    let mut banner = SlideBanner::new(i32::MAX, 1, &motion);
    while banner.phase() == Phase::SlidingIn {
        banner.tick();
    }
    assert!(banner.finish_dwell());

    let mut ticks = 0;
    while banner.tick() != Step::Departed {
        ticks += 1;
    }

    assert_eq!(banner.phase(), Phase::Closed);
    assert!(ticks <= 1);
}
