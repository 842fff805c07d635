/*!
Typed `wgpu` buffers.

A [`Buffer<A>`] remembers the element type it was created with, so the pixel
grid and the uniforms can only ever be written with the data they describe.
*/

use std::{marker::PhantomData, mem::size_of};

use wgpu::util::DeviceExt;

pub struct Buffer<A> {
    buffer: wgpu::Buffer,
    len: usize,
    phantom_data: PhantomData<A>,
}

impl<A: bytemuck::Pod + bytemuck::Zeroable> Buffer<A> {
    /// Overwrite the buffer from the start. `contents` must fit.
    pub fn write(&self, queue: &wgpu::Queue, contents: &[A]) {
        debug_assert!(contents.len() <= self.len);
        queue.write_buffer(&self.buffer, 0, bytemuck::cast_slice(contents));
    }

    pub fn slice(&self) -> wgpu::BufferSlice {
        self.buffer.slice(..(self.len * size_of::<A>()) as wgpu::BufferAddress)
    }

    pub fn binding_resource(&self) -> wgpu::BindingResource {
        self.buffer.as_entire_binding()
    }

    /// Number of `A`s the buffer holds.
    pub fn len(&self) -> usize {
        self.len
    }
}

pub struct Builder<'a, A> {
    label: Option<&'a str>,
    contents: &'a [A],
    usage: wgpu::BufferUsages,
}

impl<'a, A: bytemuck::Pod + bytemuck::Zeroable> From<&'a [A]> for Builder<'a, A> {
    fn from(contents: &'a [A]) -> Self {
        Self {
            label: None,
            contents,
            usage: wgpu::BufferUsages::COPY_DST,
        }
    }
}

impl<'a, A: bytemuck::Pod + bytemuck::Zeroable> Builder<'a, A> {
    pub fn with_label(mut self, label: &'a str) -> Self {
        self.label = Some(label);
        self
    }

    pub fn with_usage(mut self, usage: wgpu::BufferUsages) -> Self {
        self.usage |= usage;
        self
    }

    pub fn create(self, device: &wgpu::Device) -> Buffer<A> {
        let buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: self.label,
            contents: bytemuck::cast_slice(self.contents),
            usage: self.usage,
        });

        Buffer {
            buffer,
            len: self.contents.len(),
            phantom_data: PhantomData,
        }
    }
}
