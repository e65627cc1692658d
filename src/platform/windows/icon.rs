//! HICON creation from [`IconImage`] pixels.

use std::ffi::c_void;

use windows::Win32::Foundation::{HWND, LPARAM, WPARAM};
use windows::Win32::Graphics::Gdi::{CreateBitmap, DeleteObject};
use windows::Win32::UI::WindowsAndMessaging::{
    CreateIconIndirect, DestroyIcon, SendMessageW, HICON, ICONINFO, ICON_BIG, ICON_SMALL,
    WM_SETICON,
};

use crate::error::{PlatformError, PlatformResult};
use crate::icon::IconImage;

/// Edge length of the window icon.
pub const WINDOW_ICON_SIZE: u32 = 32;

/// Build a 32×32 colour icon with a transparency mask.
pub fn create_hicon(image: &IconImage) -> PlatformResult<HICON> {
    let image = image.resize_nearest(WINDOW_ICON_SIZE);
    let color_bits = image.to_bgra();
    let mask_bits = image.and_mask();
    let (w, h) = (image.width as i32, image.height as i32);

    unsafe {
        let mask = CreateBitmap(w, h, 1, 1, Some(mask_bits.as_ptr() as *const c_void));
        let color = CreateBitmap(w, h, 1, 32, Some(color_bits.as_ptr() as *const c_void));

        let info = ICONINFO {
            fIcon: true.into(),
            xHotspot: 0,
            yHotspot: 0,
            hbmMask: mask,
            hbmColor: color,
        };
        let icon = CreateIconIndirect(&info);

        let _ = DeleteObject(mask.into());
        let _ = DeleteObject(color.into());

        icon.map_err(|e| PlatformError::Window(format!("CreateIconIndirect failed: {e}")))
    }
}

/// Use `icon` for both the title bar and the taskbar.
pub fn apply_window_icon(hwnd: HWND, icon: HICON) {
    unsafe {
        for which in [ICON_SMALL, ICON_BIG] {
            SendMessageW(
                hwnd,
                WM_SETICON,
                Some(WPARAM(which as usize)),
                Some(LPARAM(icon.0 as isize)),
            );
        }
    }
}

pub fn destroy_icon(icon: HICON) {
    if !icon.is_invalid() {
        unsafe {
            let _ = DestroyIcon(icon);
        }
    }
}
