//! Hero slideshow and slider pages on the headless platform.

use std::rc::Rc;

use footprint::headless::HeadlessPlatform;
use footprint::pages::{HeroPage, HouseholdPage, HousingPage, Page};
use footprint::platform::Platform;
use footprint::TimingConfig;

fn active_slides(platform: &HeadlessPlatform) -> Vec<usize> {
    platform
        .by_class(None, "background-slide")
        .iter()
        .enumerate()
        .filter(|(_, s)| platform.has_class(s, "active"))
        .map(|(i, _)| i)
        .collect()
}

mod hero {
    use super::*;
    use pretty_assertions::assert_eq;

    fn mount(slides: usize) -> (Rc<HeadlessPlatform>, HeroPage<HeadlessPlatform>) {
        let platform = Rc::new(HeadlessPlatform::with_hero_page(slides));
        let page = HeroPage::mount(Rc::clone(&platform), &TimingConfig::default());
        (platform, page)
    }

    #[test]
    fn slideshow_advances_and_wraps() {
        let (platform, page) = mount(3);
        assert_eq!(active_slides(&platform), vec![0]);

        platform.advance(5000.0);
        assert_eq!(active_slides(&platform), vec![1]);
        platform.advance(10_000.0);
        assert_eq!(active_slides(&platform), vec![0]);
        assert_eq!(page.current_slide(), 0);
    }

    #[test]
    fn hover_pauses_without_duplicating_timers() {
        let (platform, page) = mount(3);
        let container = platform.by_id("heroContainer").unwrap();

        for _ in 0..5 {
            platform.hover(container, true);
            platform.hover(container, false);
        }
        assert_eq!(platform.repeating_timer_count(), 1);
        assert!(page.is_playing());

        platform.hover(container, true);
        assert_eq!(platform.repeating_timer_count(), 0);
        platform.advance(20_000.0);
        assert_eq!(active_slides(&platform), vec![0]);

        platform.hover(container, false);
        platform.advance(5000.0);
        assert_eq!(active_slides(&platform), vec![1]);
    }

    #[test]
    fn dropping_the_page_stops_the_slideshow() {
        let (platform, page) = mount(2);
        assert_eq!(platform.repeating_timer_count(), 1);
        drop(page);
        assert_eq!(platform.repeating_timer_count(), 0);
    }

    #[test]
    fn single_slide_does_not_rotate() {
        let (platform, page) = mount(1);
        assert!(!page.is_playing());
        platform.advance(10_000.0);
        assert_eq!(active_slides(&platform), vec![0]);
    }

    #[test]
    fn nav_links_scroll() {
        let (platform, _page) = mount(2);

        platform.click_id("navHome");
        assert_eq!(platform.scroll_top_count(), 1);

        platform.click_id("navAbout");
        let about = platform.by_id("about").unwrap();
        assert_eq!(platform.scrolled_into_view(), vec![about]);

        // #quiz has no target section
        platform.click_id("navQuiz");
        assert_eq!(platform.scrolled_into_view().len(), 1);
        assert!(platform.navigations().is_empty());
    }

    #[test]
    fn start_button_opens_first_question() {
        let (platform, _page) = mount(2);
        platform.click_id("startButton");
        assert_eq!(platform.navigations(), vec!["index.html".to_string()]);
    }

    #[test]
    fn content_fades_in() {
        let (platform, _page) = mount(2);
        let content = platform.by_id("heroContent").unwrap();
        assert_eq!(platform.style(content, "opacity").as_deref(), Some("0"));

        platform.advance(500.0);
        assert_eq!(platform.style(content, "opacity").as_deref(), Some("1"));
        assert_eq!(
            platform.style(content, "transition").as_deref(),
            Some("opacity 1s ease, transform 1s ease")
        );
    }
}

mod housing {
    use super::*;
    use pretty_assertions::assert_eq;

    fn active_images(platform: &HeadlessPlatform) -> Vec<usize> {
        platform
            .by_class(None, "housing-image")
            .iter()
            .enumerate()
            .filter(|(_, img)| platform.has_class(img, "active"))
            .map(|(i, _)| i)
            .collect()
    }

    #[test]
    fn initial_value_is_applied() {
        let platform = Rc::new(HeadlessPlatform::with_housing_page());
        let page = HousingPage::mount(Rc::clone(&platform));
        assert_eq!(page.selected(), Some(0));
        assert_eq!(platform.text_of("housing-value").as_deref(), Some("1RK"));
        assert_eq!(active_images(&platform), vec![0]);
    }

    #[test]
    fn slider_input_moves_the_active_image() {
        let platform = Rc::new(HeadlessPlatform::with_housing_page());
        let _page = HousingPage::mount(Rc::clone(&platform));
        let slider = platform.by_id("housingSlider").unwrap();

        platform.input(slider, "3");
        assert_eq!(platform.text_of("housing-value").as_deref(), Some("3 BHK"));
        assert_eq!(active_images(&platform), vec![3]);

        platform.input(slider, "9");
        assert_eq!(platform.text_of("housing-value").as_deref(), Some("3 BHK"));
        assert_eq!(active_images(&platform), vec![3]);
    }

    #[test]
    fn question_buttons_navigate() {
        let platform = Rc::new(HeadlessPlatform::with_housing_page());
        let _page = HousingPage::mount(Rc::clone(&platform));
        platform.click_id("prevButton");
        platform.click_id("nextButton");
        assert_eq!(
            platform.navigations(),
            vec![Page::Index.file().to_string(), Page::Household.file().to_string()]
        );
    }
}

mod household {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn slider_bounds_are_set_on_mount() {
        let platform = Rc::new(HeadlessPlatform::with_household_page());
        let page = HouseholdPage::mount(Rc::clone(&platform));
        let slider = platform.by_id("householdSlider").unwrap();

        assert_eq!(platform.attr(&slider, "min").as_deref(), Some("1"));
        assert_eq!(platform.attr(&slider, "max").as_deref(), Some("10"));
        assert_eq!(page.size(), Some(4));
        assert_eq!(platform.text_of("household-value").as_deref(), Some("4 people"));
    }

    #[test]
    fn ten_means_ten_plus() {
        let platform = Rc::new(HeadlessPlatform::with_household_page());
        let _page = HouseholdPage::mount(Rc::clone(&platform));
        let slider = platform.by_id("householdSlider").unwrap();
        let image = platform.by_id("household-main-image").unwrap();

        platform.input(slider, "10");
        assert_eq!(platform.text_of("household-value").as_deref(), Some("10+ people"));
        assert_eq!(platform.attr(&image, "alt").as_deref(), Some("10+ people"));
        assert_eq!(
            platform.attr(&image, "src").as_deref(),
            Some("https://via.placeholder.com/120x120/2d3748/ffffff?text=10%2B")
        );

        platform.input(slider, "1");
        assert_eq!(platform.text_of("household-value").as_deref(), Some("1 person"));
    }

    #[test]
    fn question_buttons_navigate() {
        let platform = Rc::new(HeadlessPlatform::with_household_page());
        let _page = HouseholdPage::mount(Rc::clone(&platform));
        platform.click_id("prevButton");
        platform.click_id("nextButton");
        assert_eq!(
            platform.navigations(),
            vec!["housing.html".to_string(), "solar.html".to_string()]
        );
    }
}
