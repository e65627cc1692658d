//! GDI resources and owner-drawn painting.

use windows::core::PCWSTR;
use windows::Win32::Foundation::{COLORREF, HWND, RECT, WPARAM};
use windows::Win32::Graphics::Gdi::{
    CreateFontW, CreateSolidBrush, DeleteObject, DrawTextW, FillRect, SelectObject, SetBkMode,
    SetTextColor, ANTIALIASED_QUALITY, CLIP_DEFAULT_PRECIS, DEFAULT_CHARSET, DT_CENTER,
    DT_SINGLELINE, DT_VCENTER, HBRUSH, HDC, HFONT, OUT_DEFAULT_PRECIS, TRANSPARENT,
};
use windows::Win32::UI::Controls::DRAWITEMSTRUCT;
use windows::Win32::UI::WindowsAndMessaging::GetClientRect;

use crate::model::constants::*;
use crate::platform::windows::app::state::UiHandles;

const FONT_HEIGHT: i32 = -18;
const FONT_WEIGHT_SEMIBOLD: i32 = 600;

/// Convert 0xRRGGBB to a GDI COLORREF (0x00BBGGRR).
pub fn colorref(color: u32) -> COLORREF {
    let (r, g, b) = rgb_bytes(color);
    COLORREF(r as u32 | (g as u32) << 8 | (b as u32) << 16)
}

/// Brushes and font used by the window and button.
pub struct GdiResources {
    pub font: HFONT,
    pub brush_background: HBRUSH,
    pub brush_idle: HBRUSH,
    pub brush_active: HBRUSH,
}

pub fn create_gdi_resources() -> GdiResources {
    unsafe {
        let face = to_wide("Segoe UI");
        GdiResources {
            font: CreateFontW(
                FONT_HEIGHT,
                0,
                0,
                0,
                FONT_WEIGHT_SEMIBOLD,
                0,
                0,
                0,
                DEFAULT_CHARSET,
                OUT_DEFAULT_PRECIS,
                CLIP_DEFAULT_PRECIS,
                ANTIALIASED_QUALITY,
                0,
                PCWSTR(face.as_ptr()),
            ),
            brush_background: CreateSolidBrush(colorref(COLOR_BACKGROUND)),
            brush_idle: CreateSolidBrush(colorref(COLOR_IDLE)),
            brush_active: CreateSolidBrush(colorref(COLOR_ACTIVE)),
        }
    }
}

pub fn delete_gdi_resources(handles: &UiHandles) {
    unsafe {
        let _ = DeleteObject(handles.font.into());
        let _ = DeleteObject(handles.brush_background.into());
        let _ = DeleteObject(handles.brush_idle.into());
        let _ = DeleteObject(handles.brush_active.into());
    }
}

/// `WM_ERASEBKGND`: fill the client area with the background colour.
pub fn erase_background(hwnd: HWND, wparam: WPARAM, handles: &UiHandles) {
    unsafe {
        let hdc = HDC(wparam.0 as *mut _);
        let mut rc = RECT::default();
        if GetClientRect(hwnd, &mut rc).is_ok() {
            FillRect(hdc, &rc, handles.brush_background);
        }
    }
}

/// `WM_DRAWITEM`: flat fill plus centred white label.
///
/// # Safety
/// `item` must point to the DRAWITEMSTRUCT passed with the message.
pub unsafe fn draw_button(item: &DRAWITEMSTRUCT, handles: &UiHandles, active: bool) {
    let (label, _) = button_appearance(active);
    let brush = if active {
        handles.brush_active
    } else {
        handles.brush_idle
    };

    let mut rc = item.rcItem;
    FillRect(item.hDC, &rc, brush);
    SetBkMode(item.hDC, TRANSPARENT);
    SetTextColor(item.hDC, colorref(COLOR_TEXT));
    SelectObject(item.hDC, handles.font.into());

    let mut text: Vec<u16> = label.encode_utf16().collect();
    DrawTextW(
        item.hDC,
        &mut text,
        &mut rc,
        DT_CENTER | DT_VCENTER | DT_SINGLELINE,
    );
}

/// NUL-terminated UTF-16 copy of `s`.
pub fn to_wide(s: &str) -> Vec<u16> {
    s.encode_utf16().chain(std::iter::once(0)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn colorref_swaps_red_and_blue() {
        assert_eq!(colorref(0x0078D4), COLORREF(0x00D47800));
    }

    #[test]
    fn to_wide_is_nul_terminated() {
        assert_eq!(to_wide("Q"), vec![0x51, 0]);
    }
}
