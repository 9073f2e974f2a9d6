//! macOS implementation backed by CoreMediaIO.
//!
//! Every query is a one-shot property read on a CMIO object; nothing is
//! cached between snapshots.

use crate::device::Device;
use crate::error::{DetectError, DetectResult};
use crate::provider::DeviceEnumerator;
use core_foundation::base::TCFType;
use core_foundation::string::{CFString, CFStringRef};
use std::ffi::c_void;

type CmioObjectId = u32;
type OsStatus = i32;

const NO_ERR: OsStatus = 0;

const fn fourcc(code: &[u8; 4]) -> u32 {
    u32::from_be_bytes(*code)
}

const SYSTEM_OBJECT: CmioObjectId = 1;

const SCOPE_GLOBAL: u32 = fourcc(b"glob");
const SCOPE_INPUT: u32 = fourcc(b"inpt");
const ELEMENT_MAIN: u32 = 0;

const HARDWARE_DEVICES: u32 = fourcc(b"dev#");
const OBJECT_NAME: u32 = fourcc(b"lnam");
const DEVICE_IS_RUNNING_SOMEWHERE: u32 = fourcc(b"gone");
const DEVICE_STREAMS: u32 = fourcc(b"stm#");

#[repr(C)]
struct PropertyAddress {
    selector: u32,
    scope: u32,
    element: u32,
}

impl PropertyAddress {
    const fn global(selector: u32) -> Self {
        Self {
            selector,
            scope: SCOPE_GLOBAL,
            element: ELEMENT_MAIN,
        }
    }
}

#[link(name = "CoreMediaIO", kind = "framework")]
extern "C" {
    fn CMIOObjectGetPropertyDataSize(
        object_id: CmioObjectId,
        address: *const PropertyAddress,
        qualifier_data_size: u32,
        qualifier_data: *const c_void,
        data_size: *mut u32,
    ) -> OsStatus;

    fn CMIOObjectGetPropertyData(
        object_id: CmioObjectId,
        address: *const PropertyAddress,
        qualifier_data_size: u32,
        qualifier_data: *const c_void,
        data_size: u32,
        data_used: *mut u32,
        data: *mut c_void,
    ) -> OsStatus;
}

/// Enumerates CMIO devices (cameras and some audio devices show up here).
#[derive(Debug, Default)]
pub struct CoreMediaIoProvider;

impl CoreMediaIoProvider {
    pub fn new() -> Self {
        Self
    }
}

impl DeviceEnumerator for CoreMediaIoProvider {
    fn enumerate(&self) -> DetectResult<Vec<Device>> {
        let ids = device_ids().map_err(|status| DetectError::Enumerate { status })?;

        let mut devices = Vec::with_capacity(ids.len());
        for id in ids {
            let Some(name) = device_name(id) else {
                tracing::debug!(id, "skipping device without readable name");
                continue;
            };

            devices.push(Device {
                id,
                name,
                running: is_running_somewhere(id).unwrap_or(false),
                has_video: has_input_streams(id),
            });
        }

        Ok(devices)
    }
}

fn device_ids() -> Result<Vec<CmioObjectId>, OsStatus> {
    let addr = PropertyAddress::global(HARDWARE_DEVICES);

    let mut data_size: u32 = 0;
    let status = unsafe {
        CMIOObjectGetPropertyDataSize(SYSTEM_OBJECT, &addr, 0, std::ptr::null(), &mut data_size)
    };
    if status != NO_ERR {
        return Err(status);
    }

    let count = data_size as usize / std::mem::size_of::<CmioObjectId>();
    let mut ids: Vec<CmioObjectId> = vec![0; count];
    let mut data_used: u32 = 0;

    let status = unsafe {
        CMIOObjectGetPropertyData(
            SYSTEM_OBJECT,
            &addr,
            0,
            std::ptr::null(),
            (count * std::mem::size_of::<CmioObjectId>()) as u32,
            &mut data_used,
            ids.as_mut_ptr() as *mut c_void,
        )
    };
    if status != NO_ERR {
        return Err(status);
    }

    // The device list may shrink between the two calls.
    ids.truncate(data_used as usize / std::mem::size_of::<CmioObjectId>());
    Ok(ids)
}

fn device_name(id: CmioObjectId) -> Option<String> {
    let addr = PropertyAddress::global(OBJECT_NAME);

    let mut name_ref: CFStringRef = std::ptr::null();
    let mut data_used: u32 = 0;

    let status = unsafe {
        CMIOObjectGetPropertyData(
            id,
            &addr,
            0,
            std::ptr::null(),
            std::mem::size_of::<CFStringRef>() as u32,
            &mut data_used,
            &mut name_ref as *mut CFStringRef as *mut c_void,
        )
    };
    if status != NO_ERR || name_ref.is_null() {
        return None;
    }

    // The property getter hands us a +1 reference.
    let name = unsafe { CFString::wrap_under_create_rule(name_ref) };
    Some(name.to_string())
}

fn is_running_somewhere(id: CmioObjectId) -> Option<bool> {
    let addr = PropertyAddress::global(DEVICE_IS_RUNNING_SOMEWHERE);

    let mut running: u32 = 0;
    let mut data_used: u32 = 0;

    let status = unsafe {
        CMIOObjectGetPropertyData(
            id,
            &addr,
            0,
            std::ptr::null(),
            std::mem::size_of::<u32>() as u32,
            &mut data_used,
            &mut running as *mut u32 as *mut c_void,
        )
    };
    if status != NO_ERR {
        tracing::debug!(id, status, "running query failed");
        return None;
    }

    Some(running != 0)
}

fn has_input_streams(id: CmioObjectId) -> bool {
    let addr = PropertyAddress {
        selector: DEVICE_STREAMS,
        scope: SCOPE_INPUT,
        element: ELEMENT_MAIN,
    };

    let mut data_size: u32 = 0;
    let status =
        unsafe { CMIOObjectGetPropertyDataSize(id, &addr, 0, std::ptr::null(), &mut data_size) };

    status == NO_ERR && data_size > 0
}
