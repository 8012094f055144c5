use mawaqit_domain::{format_date, NotificationPermission};

use crate::controller::Controller;

/// Renders the controller's state to stdout: date header, resolved location,
/// error line, the visible prayer list and the notification status.
pub fn render(controller: &Controller) {
    println!();
    if let Some(date) = controller.date() {
        println!("  {}", format_date(date));
    }
    println!("  {}", controller.location_label());
    println!();

    if controller.is_loading() {
        println!("  Loading prayer times...");
    }
    if let Some(err) = controller.error() {
        println!("  {}", err);
    }

    if let Some(times) = controller.times() {
        for (prayer, time) in times.visible() {
            println!("  {:<8} {:>9}", prayer.as_str(), time.format_12h());
        }
        println!();
    }

    match controller.permission() {
        NotificationPermission::Unrequested => {}
        NotificationPermission::Granted => match controller.pending() {
            Some((prayer, fires_at)) => println!(
                "  Notifications are enabled. Next alert: {} at {}.",
                prayer,
                fires_at.format("%H:%M")
            ),
            None => println!("  Notifications are enabled."),
        },
        NotificationPermission::Denied => {
            println!("  Notifications are blocked.")
        }
    }
}
